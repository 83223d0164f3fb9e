use autometrics::autometrics;
use org_core::model::permission::{Permission, PermissionRelations, UpdatePermissionRequest};
use org_core::repository::error::DataLayerError;
use org_core::repository::permission_repository::PermissionRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::RoleId;

use super::PermissionProvider;
use crate::entity::permission;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl PermissionRepository for PermissionProvider {
    async fn get_role_permission_list(
        &self,
        role_id: &RoleId,
        _relations: &PermissionRelations,
    ) -> Result<Vec<Permission>, DataLayerError> {
        let permissions = permission::Entity::find()
            .filter(permission::Column::RoleId.eq(role_id))
            .order_by_asc(permission::Column::CreatedDate)
            .order_by_asc(permission::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(permissions.into_iter().map(Into::into).collect())
    }

    async fn update_permission(
        &self,
        request: UpdatePermissionRequest,
    ) -> Result<u64, DataLayerError> {
        let id = request.id;

        let result = permission::Entity::update_many()
            .set(permission::ActiveModel::from(request))
            .filter(permission::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        tracing::debug!(permission_id = %id, rows = result.rows_affected, "Permission updated");

        Ok(result.rows_affected)
    }
}
