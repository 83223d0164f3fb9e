use shared_types::{OrganisationId, RoleId, UserId};
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: {0}")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Organization with ID {0} not found")]
    Organisation(OrganisationId),

    #[error("Role with ID {0} not found in the specified organization")]
    Role(RoleId),

    #[error("Permission not found in the specified role")]
    RolePermission(RoleId),

    #[error("User with ID {0} not found")]
    User(UserId),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Organisation with this email already exists")]
    OrganisationEmailAlreadyExists,

    #[error("User does not have access to the organisation")]
    NotOrganisationMember {
        organisation_id: OrganisationId,
        user_id: UserId,
    },

    #[error("User has no organisations")]
    NoUserOrganisations(UserId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid page `{0}`, pages are counted from 1")]
    InvalidPage(u32),

    #[error("Invalid page size `{page_size}`, must be between 1 and {max}")]
    InvalidPageSize { page_size: u32, max: u32 },

    #[error("Empty field `{0}`")]
    EmptyField(&'static str),
}

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("Failed to update permissions: {0}")]
    PermissionUpdate(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0011,
    BR_0012,
    BR_0013,
    BR_0014,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unspecified error",
            ErrorCode::BR_0001 => "Organisation not found",
            ErrorCode::BR_0002 => "Role not found",
            ErrorCode::BR_0003 => "Permission not found",
            ErrorCode::BR_0004 => "User not found",
            ErrorCode::BR_0005 => "Organisation email already exists",
            ErrorCode::BR_0006 => "User is not a member of the organisation",
            ErrorCode::BR_0007 => "User has no organisations",
            ErrorCode::BR_0008 => "Invalid page",
            ErrorCode::BR_0009 => "Invalid page size",
            ErrorCode::BR_0010 => "Permission update failed",
            ErrorCode::BR_0011 => "Response mapping error",
            ErrorCode::BR_0012 => "Database error",
            ErrorCode::BR_0013 => "Unauthorized",
            ErrorCode::BR_0014 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Internal(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::BR_0011,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Organisation(_) => ErrorCode::BR_0001,
            EntityNotFoundError::Role(_) => ErrorCode::BR_0002,
            EntityNotFoundError::RolePermission(_) => ErrorCode::BR_0003,
            EntityNotFoundError::User(_) => ErrorCode::BR_0004,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::OrganisationEmailAlreadyExists => ErrorCode::BR_0005,
            BusinessLogicError::NotOrganisationMember { .. } => ErrorCode::BR_0006,
            BusinessLogicError::NoUserOrganisations(_) => ErrorCode::BR_0007,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidPage(_) => ErrorCode::BR_0008,
            ValidationError::InvalidPageSize { .. } => ErrorCode::BR_0009,
            ValidationError::EmptyField(_) => ErrorCode::BR_0014,
        }
    }
}

impl InternalError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            InternalError::PermissionUpdate(_) => ErrorCode::BR_0010,
        }
    }
}
