use org_core::model::user::User;

use crate::entity::user;

impl From<user::Model> for User {
    fn from(value: user::Model) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone_number: value.phone_number,
            created_date: value.created_date,
            last_modified: value.last_modified,
            created_organisations: None,
            owned_organisations: None,
        }
    }
}
