use one_dto_mapper::convert_inner;
use org_core::service::organisation::dto::{
    CreateOrganisationResponseDTO, GetOrganisationMembersResponseDTO,
    GetUserOrganisationsResponseDTO,
};

use super::dto::{
    CreateOrganisationResponseRestDTO, GetOrganisationMembersResponseRestDTO,
    GetUserOrganisationsResponseRestDTO, UserOrganisationsRestDTO,
};

const STATUS_SUCCESS: &str = "success";
const STATUS_CODE_OK: u16 = 200;

impl From<CreateOrganisationResponseDTO> for CreateOrganisationResponseRestDTO {
    fn from(value: CreateOrganisationResponseDTO) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: value.message,
            data: value.organisation.into(),
        }
    }
}

impl From<GetOrganisationMembersResponseDTO> for GetOrganisationMembersResponseRestDTO {
    fn from(value: GetOrganisationMembersResponseDTO) -> Self {
        Self {
            status_code: STATUS_CODE_OK,
            message: value.message,
            total_items: value.total_items,
            data: convert_inner(value.members),
        }
    }
}

impl From<GetUserOrganisationsResponseDTO> for GetUserOrganisationsResponseRestDTO {
    fn from(value: GetUserOrganisationsResponseDTO) -> Self {
        Self {
            status_code: STATUS_CODE_OK,
            message: value.message,
            data: UserOrganisationsRestDTO {
                created_organisations: convert_inner(value.created_organisations),
                owned_organisations: convert_inner(value.owned_organisations),
                member_organisations: convert_inner(value.member_organisations),
            },
        }
    }
}
