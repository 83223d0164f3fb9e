use shared_types::{OrganisationId, OrganisationMemberId, RoleId, UserId};
use time::OffsetDateTime;

use super::organisation::{Organisation, OrganisationRelations};
use super::role::{Role, RoleRelations};
use super::user::{User, UserRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrganisationMember {
    pub id: OrganisationMemberId,
    pub user_id: UserId,
    pub organisation_id: OrganisationId,
    pub role_id: Option<RoleId>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub user: Option<User>,
    pub organisation: Option<Organisation>,
    pub role: Option<Role>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct OrganisationMemberRelations {
    pub user: Option<UserRelations>,
    pub organisation: Option<OrganisationRelations>,
    pub role: Option<RoleRelations>,
}
