use std::sync::Arc;

use org_core::repository::role_repository::RoleRepository;
use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;


pub(crate) struct OrganisationProvider {
    pub db: DatabaseConnection,
    pub role_repository: Arc<dyn RoleRepository>,
}
