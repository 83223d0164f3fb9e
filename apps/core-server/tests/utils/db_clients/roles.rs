use std::sync::Arc;

use org_core::model::permission::{Permission, PermissionRelations};
use org_core::repository::permission_repository::PermissionRepository;
use shared_types::{OrganisationId, RoleId};
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::{insert_permission, insert_role};

pub struct RolesDB {
    db: DbConn,
    permissions: Arc<dyn PermissionRepository>,
}

impl RolesDB {
    pub fn new(db: DbConn, permissions: Arc<dyn PermissionRepository>) -> Self {
        Self { db, permissions }
    }

    /// Role with a single permission record, all flags cleared
    pub async fn create(&self, organisation_id: OrganisationId, name: &str) -> RoleId {
        let role_id = insert_role(&self.db, name, organisation_id).await.unwrap();
        insert_permission(&self.db, role_id).await.unwrap();
        role_id
    }

    pub async fn create_without_permissions(
        &self,
        organisation_id: OrganisationId,
        name: &str,
    ) -> RoleId {
        insert_role(&self.db, name, organisation_id).await.unwrap()
    }

    pub async fn permissions(&self, role_id: &RoleId) -> Vec<Permission> {
        self.permissions
            .get_role_permission_list(role_id, &PermissionRelations::default())
            .await
            .unwrap()
    }
}
