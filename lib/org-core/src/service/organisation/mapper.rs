use shared_types::{OrganisationId, UserId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{
    CreateOrganisationRequestDTO, MemberOrganisationResponseDTO, OrganisationResponseDTO,
    UpdateOrganisationRequestDTO,
};
use crate::model::organisation::{Organisation, UpdateOrganisationRequest};
use crate::model::organisation_member::OrganisationMember;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, ServiceError};

pub(super) fn organisation_from_create_request(
    request: CreateOrganisationRequestDTO,
    owner_id: UserId,
    now: OffsetDateTime,
) -> Organisation {
    Organisation {
        id: Uuid::new_v4().into(),
        name: request.name,
        description: request.description,
        email: request.email,
        industry: request.industry,
        organisation_type: request.organisation_type,
        country: request.country,
        address: request.address,
        state: request.state,
        owner_id,
        creator_id: owner_id,
        is_deleted: false,
        created_date: now,
        last_modified: now,
        roles: None,
    }
}

pub(super) fn owner_membership(
    organisation_id: OrganisationId,
    owner_id: UserId,
    now: OffsetDateTime,
) -> OrganisationMember {
    OrganisationMember {
        id: Uuid::new_v4().into(),
        user_id: owner_id,
        organisation_id,
        role_id: None,
        created_date: now,
        last_modified: now,
        user: None,
        organisation: None,
        role: None,
    }
}

pub(super) fn update_request_from_dto(
    id: OrganisationId,
    request: UpdateOrganisationRequestDTO,
) -> UpdateOrganisationRequest {
    UpdateOrganisationRequest {
        id,
        name: request.name,
        description: request.description,
        email: request.email,
        industry: request.industry,
        organisation_type: request.organisation_type,
        country: request.country,
        address: request.address,
        state: request.state,
        is_deleted: None,
    }
}

/// Skips memberships of deleted organisations
pub(super) fn member_organisations(
    memberships: Vec<OrganisationMember>,
) -> Result<Vec<MemberOrganisationResponseDTO>, ServiceError> {
    let mut result = Vec::with_capacity(memberships.len());

    for membership in memberships {
        let organisation = membership.organisation.ok_or(ServiceError::MappingError(
            "organisation is None".to_string(),
        ))?;

        if organisation.is_deleted {
            continue;
        }

        result.push(MemberOrganisationResponseDTO {
            organisation: organisation.into(),
            role: membership.role.map(Into::into),
        });
    }

    Ok(result)
}

pub(super) fn active_organisations(
    organisations: Option<Vec<Organisation>>,
    relation: &'static str,
) -> Result<Vec<OrganisationResponseDTO>, ServiceError> {
    let organisations =
        organisations.ok_or_else(|| ServiceError::MappingError(format!("{relation} is None")))?;

    Ok(organisations
        .into_iter()
        .filter(|organisation| !organisation.is_deleted)
        .map(Into::into)
        .collect())
}

/// The unique e-mail index is the only uniqueness constraint on organisations
pub(super) fn email_conflict_error(error: DataLayerError) -> ServiceError {
    match error {
        DataLayerError::AlreadyExists => BusinessLogicError::OrganisationEmailAlreadyExists.into(),
        error => error.into(),
    }
}
