use one_dto_mapper::From;
use shared_types::{OrganisationId, RoleId, UserId};
use time::OffsetDateTime;

use crate::model::organisation::Organisation;
use crate::model::role::Role;
use crate::model::user::User;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateOrganisationRequestDTO {
    pub name: String,
    pub description: String,
    pub email: String,
    pub industry: String,
    pub organisation_type: String,
    pub country: String,
    pub address: String,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateOrganisationResponseDTO {
    pub message: String,
    pub organisation: OrganisationResponseDTO,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateOrganisationRequestDTO {
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub organisation_type: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOrganisationResponseDTO {
    pub message: String,
    pub organisation: OrganisationResponseDTO,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Organisation)]
pub struct OrganisationResponseDTO {
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
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetOrganisationMembersResponseDTO {
    pub message: String,
    pub total_items: u64,
    pub members: Vec<OrganisationMemberResponseDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(User)]
pub struct OrganisationMemberResponseDTO {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetUserOrganisationsResponseDTO {
    pub message: String,
    pub created_organisations: Vec<OrganisationResponseDTO>,
    pub owned_organisations: Vec<OrganisationResponseDTO>,
    pub member_organisations: Vec<MemberOrganisationResponseDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberOrganisationResponseDTO {
    pub organisation: OrganisationResponseDTO,
    pub role: Option<MemberRoleResponseDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Role)]
pub struct MemberRoleResponseDTO {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
}
