use shared_types::{OrganisationId, UserId};
use time::OffsetDateTime;

use super::role::{Role, RoleRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Organisation {
    pub id: OrganisationId,
    pub name: String,
    pub description: String,
    pub email: String,
    pub industry: String,
    pub organisation_type: String,
    pub country: String,
    pub address: String,
    pub state: String,
    pub owner_id: UserId,
    pub creator_id: UserId,
    pub is_deleted: bool,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub roles: Option<Vec<Role>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct OrganisationRelations {
    pub roles: Option<RoleRelations>,
}

/// Partial update, `None` fields are left untouched
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateOrganisationRequest {
    pub id: OrganisationId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub organisation_type: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub is_deleted: Option<bool>,
}

impl UpdateOrganisationRequest {
    pub fn soft_delete(id: OrganisationId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            email: None,
            industry: None,
            organisation_type: None,
            country: None,
            address: None,
            state: None,
            is_deleted: Some(true),
        }
    }
}

/// How a user is linked to an organisation on the organisation row itself
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrganisationUserLink {
    Creator,
    Owner,
}
