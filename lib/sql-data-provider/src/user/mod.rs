use std::sync::Arc;

use org_core::repository::organisation_repository::OrganisationRepository;
use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;


pub(crate) struct UserProvider {
    pub db: DatabaseConnection,
    pub organisation_repository: Arc<dyn OrganisationRepository>,
}
