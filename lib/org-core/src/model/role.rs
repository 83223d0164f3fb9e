use shared_types::{OrganisationId, RoleId};
use time::OffsetDateTime;

use super::permission::{Permission, PermissionRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub organisation_id: OrganisationId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub permissions: Option<Vec<Permission>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct RoleRelations {
    pub permissions: Option<PermissionRelations>,
}
