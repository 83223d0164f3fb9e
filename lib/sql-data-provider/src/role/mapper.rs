use org_core::model::role::Role;

use crate::entity::role;

impl From<role::Model> for Role {
    fn from(value: role::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            organisation_id: value.organisation_id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            permissions: None,
        }
    }
}
