use std::sync::Arc;

use config::core_config::CoreConfig;
use repository::DataRepository;
use service::organisation::OrganisationService;
use service::organisation_permission::OrganisationPermissionService;

pub mod config;
pub mod model;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct OrgCore {
    pub organisation_service: OrganisationService,
    pub organisation_permission_service: OrganisationPermissionService,
    pub config: Arc<CoreConfig>,
}

impl OrgCore {
    pub fn new(data_provider: Arc<dyn DataRepository>, config: CoreConfig) -> Self {
        let config = Arc::new(config);

        Self {
            organisation_service: OrganisationService::new(
                data_provider.get_organisation_repository(),
                data_provider.get_user_repository(),
                data_provider.get_organisation_member_repository(),
                config.clone(),
            ),
            organisation_permission_service: OrganisationPermissionService::new(
                data_provider.get_organisation_repository(),
                data_provider.get_role_repository(),
                data_provider.get_permission_repository(),
            ),
            config,
        }
    }
}
