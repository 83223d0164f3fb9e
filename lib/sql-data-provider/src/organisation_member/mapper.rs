use org_core::model::organisation_member::OrganisationMember;
use sea_orm::Set;

use crate::entity::organisation_member;

impl From<organisation_member::Model> for OrganisationMember {
    fn from(value: organisation_member::Model) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            organisation_id: value.organisation_id,
            role_id: value.role_id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            user: None,
            organisation: None,
            role: None,
        }
    }
}

impl From<OrganisationMember> for organisation_member::ActiveModel {
    fn from(value: OrganisationMember) -> Self {
        Self {
            id: Set(value.id),
            user_id: Set(value.user_id),
            organisation_id: Set(value.organisation_id),
            role_id: Set(value.role_id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        }
    }
}
