use std::sync::Arc;

use org_core::repository::organisation_repository::OrganisationRepository;
use org_core::repository::role_repository::RoleRepository;
use org_core::repository::user_repository::UserRepository;
use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;


pub(crate) struct OrganisationMemberProvider {
    pub db: DatabaseConnection,
    pub user_repository: Arc<dyn UserRepository>,
    pub organisation_repository: Arc<dyn OrganisationRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
}
