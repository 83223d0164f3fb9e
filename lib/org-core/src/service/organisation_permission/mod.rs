use std::sync::Arc;

use crate::repository::organisation_repository::OrganisationRepository;
use crate::repository::permission_repository::PermissionRepository;
use crate::repository::role_repository::RoleRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;

/// Updates capability flags of organisation roles
#[derive(Clone)]
pub struct OrganisationPermissionService {
    organisation_repository: Arc<dyn OrganisationRepository>,
    role_repository: Arc<dyn RoleRepository>,
    permission_repository: Arc<dyn PermissionRepository>,
}

impl OrganisationPermissionService {
    pub fn new(
        organisation_repository: Arc<dyn OrganisationRepository>,
        role_repository: Arc<dyn RoleRepository>,
        permission_repository: Arc<dyn PermissionRepository>,
    ) -> Self {
        Self {
            organisation_repository,
            role_repository,
            permission_repository,
        }
    }
}
