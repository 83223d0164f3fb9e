use shared_types::OrganisationId;

use super::dto::{CreateOrganisationRequestDTO, UpdateOrganisationRequestDTO};
use crate::model::organisation::{Organisation, OrganisationRelations};
use crate::repository::organisation_repository::OrganisationRepository;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

/// Fetches the organisation, treating soft-deleted ones as missing
pub(crate) async fn get_active_organisation(
    repository: &dyn OrganisationRepository,
    id: &OrganisationId,
) -> Result<Organisation, ServiceError> {
    repository
        .get_organisation(id, &OrganisationRelations::default())
        .await?
        .filter(|organisation| !organisation.is_deleted)
        .ok_or(EntityNotFoundError::Organisation(*id).into())
}

pub(super) fn validate_pagination(
    page: u32,
    page_size: u32,
    max_page_size: u32,
) -> Result<(), ValidationError> {
    if page == 0 {
        return Err(ValidationError::InvalidPage(page));
    }

    if page_size == 0 || page_size > max_page_size {
        return Err(ValidationError::InvalidPageSize {
            page_size,
            max: max_page_size,
        });
    }

    Ok(())
}

pub(super) fn validate_create_request(
    request: &CreateOrganisationRequestDTO,
) -> Result<(), ValidationError> {
    not_blank("name", &request.name)?;
    not_blank("email", &request.email)
}

pub(super) fn validate_update_request(
    request: &UpdateOrganisationRequestDTO,
) -> Result<(), ValidationError> {
    if let Some(name) = &request.name {
        not_blank("name", name)?;
    }
    if let Some(email) = &request.email {
        not_blank("email", email)?;
    }
    Ok(())
}

fn not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
