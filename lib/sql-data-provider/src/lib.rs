use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use org_core::repository::DataRepository;
use org_core::repository::error::DataLayerError;
use org_core::repository::organisation_member_repository::OrganisationMemberRepository;
use org_core::repository::organisation_repository::OrganisationRepository;
use org_core::repository::permission_repository::PermissionRepository;
use org_core::repository::role_repository::RoleRepository;
use org_core::repository::user_repository::UserRepository;
use organisation::OrganisationProvider;
use organisation_member::OrganisationMemberProvider;
use permission::PermissionProvider;
use role::RoleProvider;
use sea_orm::{ConnectOptions, DatabaseConnection};
use user::UserProvider;

use crate::mapper::to_data_layer_error;

mod entity;
mod mapper;

pub mod organisation;
pub mod organisation_member;
pub mod permission;
pub mod role;
pub mod user;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    organisation_repository: Arc<dyn OrganisationRepository>,
    role_repository: Arc<dyn RoleRepository>,
    permission_repository: Arc<dyn PermissionRepository>,
    user_repository: Arc<dyn UserRepository>,
    organisation_member_repository: Arc<dyn OrganisationMemberRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let permission_repository = Arc::new(PermissionProvider { db: db.clone() });
        let role_repository = Arc::new(RoleProvider {
            db: db.clone(),
            permission_repository: permission_repository.clone(),
        });
        let organisation_repository = Arc::new(OrganisationProvider {
            db: db.clone(),
            role_repository: role_repository.clone(),
        });
        let user_repository = Arc::new(UserProvider {
            db: db.clone(),
            organisation_repository: organisation_repository.clone(),
        });
        let organisation_member_repository = Arc::new(OrganisationMemberProvider {
            db: db.clone(),
            user_repository: user_repository.clone(),
            organisation_repository: organisation_repository.clone(),
            role_repository: role_repository.clone(),
        });

        Self {
            organisation_repository,
            role_repository,
            permission_repository,
            user_repository,
            organisation_member_repository,
            db,
        }
    }
}

/// Connects to the database and brings the schema up to date
pub async fn db_conn(database_url: impl Into<String>) -> Result<DbConn, DataLayerError> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = sea_orm::Database::connect(options)
        .await
        .map_err(to_data_layer_error)?;

    Migrator::up(&db, None).await.map_err(to_data_layer_error)?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_organisation_repository(&self) -> Arc<dyn OrganisationRepository> {
        self.organisation_repository.clone()
    }
    fn get_role_repository(&self) -> Arc<dyn RoleRepository> {
        self.role_repository.clone()
    }
    fn get_permission_repository(&self) -> Arc<dyn PermissionRepository> {
        self.permission_repository.clone()
    }
    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
    fn get_organisation_member_repository(&self) -> Arc<dyn OrganisationMemberRepository> {
        self.organisation_member_repository.clone()
    }
}
