use org_core::model::organisation::{Organisation, UpdateOrganisationRequest};
use sea_orm::{Set, Unchanged};
use time::OffsetDateTime;

use crate::entity::organisation;
use crate::mapper::set_if_some;

impl From<organisation::Model> for Organisation {
    fn from(value: organisation::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            email: value.email,
            industry: value.industry,
            organisation_type: value.organisation_type,
            country: value.country,
            address: value.address,
            state: value.state,
            owner_id: value.owner_id,
            creator_id: value.creator_id,
            is_deleted: value.is_deleted,
            created_date: value.created_date,
            last_modified: value.last_modified,
            roles: None,
        }
    }
}

impl From<Organisation> for organisation::ActiveModel {
    fn from(value: Organisation) -> Self {
        Self {
            id: Set(value.id),
            name: Set(value.name),
            description: Set(value.description),
            email: Set(value.email),
            industry: Set(value.industry),
            organisation_type: Set(value.organisation_type),
            country: Set(value.country),
            address: Set(value.address),
            state: Set(value.state),
            owner_id: Set(value.owner_id),
            creator_id: Set(value.creator_id),
            is_deleted: Set(value.is_deleted),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        }
    }
}

impl From<UpdateOrganisationRequest> for organisation::ActiveModel {
    fn from(value: UpdateOrganisationRequest) -> Self {
        Self {
            id: Unchanged(value.id),
            name: set_if_some(value.name),
            description: set_if_some(value.description),
            email: set_if_some(value.email),
            industry: set_if_some(value.industry),
            organisation_type: set_if_some(value.organisation_type),
            country: set_if_some(value.country),
            address: set_if_some(value.address),
            state: set_if_some(value.state),
            is_deleted: set_if_some(value.is_deleted),
            last_modified: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
    }
}
