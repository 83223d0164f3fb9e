use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::organisation_member_repository::OrganisationMemberRepository;
use crate::repository::organisation_repository::OrganisationRepository;
use crate::repository::user_repository::UserRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct OrganisationService {
    organisation_repository: Arc<dyn OrganisationRepository>,
    user_repository: Arc<dyn UserRepository>,
    organisation_member_repository: Arc<dyn OrganisationMemberRepository>,
    config: Arc<CoreConfig>,
}

impl OrganisationService {
    pub fn new(
        organisation_repository: Arc<dyn OrganisationRepository>,
        user_repository: Arc<dyn UserRepository>,
        organisation_member_repository: Arc<dyn OrganisationMemberRepository>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            organisation_repository,
            user_repository,
            organisation_member_repository,
            config,
        }
    }
}
