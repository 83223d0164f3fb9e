use shared_types::RoleId;

use super::error::DataLayerError;
use crate::model::permission::{Permission, PermissionRelations, UpdatePermissionRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PermissionRepository: Send + Sync {
    async fn get_role_permission_list(
        &self,
        role_id: &RoleId,
        relations: &PermissionRelations,
    ) -> Result<Vec<Permission>, DataLayerError>;

    /// Applies the set flags to the record with `request.id`, returns the number of affected rows
    async fn update_permission(
        &self,
        request: UpdatePermissionRequest,
    ) -> Result<u64, DataLayerError>;
}
