use std::sync::Arc;

use org_core::repository::permission_repository::PermissionRepository;
use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;


pub(crate) struct RoleProvider {
    pub db: DatabaseConnection,
    pub permission_repository: Arc<dyn PermissionRepository>,
}
