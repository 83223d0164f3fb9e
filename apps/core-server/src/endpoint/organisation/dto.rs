use one_dto_mapper::{From, Into, convert_inner};
use org_core::service::organisation::dto::{
    CreateOrganisationRequestDTO, MemberOrganisationResponseDTO, MemberRoleResponseDTO,
    OrganisationMemberResponseDTO, OrganisationResponseDTO, UpdateOrganisationRequestDTO,
    UpdateOrganisationResponseDTO,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{OrganisationId, RoleId, UserId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Validate, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateOrganisationRequestDTO)]
pub(crate) struct CreateOrganisationRequestRestDTO {
    #[validate(length(min = 1))]
    #[schema(example = "Acme Payments")]
    pub name: String,
    pub description: String,
    #[validate(email)]
    #[schema(example = "contact@acme.example")]
    pub email: String,
    pub industry: String,
    pub organisation_type: String,
    pub country: String,
    pub address: String,
    pub state: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema, Validate, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(UpdateOrganisationRequestDTO)]
pub(crate) struct UpdateOrganisationRequestRestDTO {
    #[validate(length(min = 1))]
    #[schema(nullable = false)]
    pub name: Option<String>,
    #[schema(nullable = false)]
    pub description: Option<String>,
    #[validate(email)]
    #[schema(nullable = false)]
    pub email: Option<String>,
    #[schema(nullable = false)]
    pub industry: Option<String>,
    #[schema(nullable = false)]
    pub organisation_type: Option<String>,
    #[schema(nullable = false)]
    pub country: Option<String>,
    #[schema(nullable = false)]
    pub address: Option<String>,
    #[schema(nullable = false)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(OrganisationResponseDTO)]
pub(crate) struct OrganisationResponseRestDTO {
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
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrganisationResponseRestDTO {
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
    pub data: OrganisationResponseRestDTO,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(UpdateOrganisationResponseDTO)]
pub(crate) struct UpdateOrganisationResponseRestDTO {
    pub message: String,
    #[from(rename = "organisation")]
    pub org: OrganisationResponseRestDTO,
}

/// Paging of the member listing, pages are counted from 1
#[derive(Clone, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub(crate) struct GetOrganisationMembersQueryParams {
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u32,
    /// Defaults to 10, lowered to the configured maximum page size when that is smaller
    #[param(default = 10, minimum = 1)]
    pub page_size: Option<u32>,
}

fn default_page() -> u32 {
    1
}

const DEFAULT_PAGE_SIZE: u32 = 10;

impl GetOrganisationMembersQueryParams {
    pub(crate) fn page_size_or_default(&self, max_page_size: u32) -> u32 {
        self.page_size
            .unwrap_or_else(|| DEFAULT_PAGE_SIZE.min(max_page_size))
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetOrganisationMembersResponseRestDTO {
    #[schema(example = 200)]
    pub status_code: u16,
    pub message: String,
    pub total_items: u64,
    pub data: Vec<OrganisationMemberRestDTO>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(OrganisationMemberResponseDTO)]
pub(crate) struct OrganisationMemberRestDTO {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetUserOrganisationsResponseRestDTO {
    #[schema(example = 200)]
    pub status_code: u16,
    pub message: String,
    pub data: UserOrganisationsRestDTO,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserOrganisationsRestDTO {
    pub created_organisations: Vec<OrganisationResponseRestDTO>,
    pub owned_organisations: Vec<OrganisationResponseRestDTO>,
    pub member_organisations: Vec<MemberOrganisationRestDTO>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(MemberOrganisationResponseDTO)]
pub(crate) struct MemberOrganisationRestDTO {
    pub organisation: OrganisationResponseRestDTO,
    #[from(with_fn = convert_inner)]
    #[schema(nullable = false)]
    pub role: Option<MemberRoleRestDTO>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(MemberRoleResponseDTO)]
pub(crate) struct MemberRoleRestDTO {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
}
