use shared_types::{OrganisationId, RoleId};

use super::OrganisationPermissionService;
use super::dto::{UpdatePermissionsRequestDTO, UpdatePermissionsResponseDTO};
use super::mapper::update_permission_request;
use crate::model::permission::PermissionRelations;
use crate::model::role::RoleRelations;
use crate::service::error::{EntityNotFoundError, InternalError, ServiceError};
use crate::service::organisation::validator::get_active_organisation;

impl OrganisationPermissionService {
    /// Applies the requested flag changes to the permission record of a role.
    ///
    /// The organisation must exist and not be deleted, the role must belong to it
    /// and carry at least one permission record. Only the first permission record
    /// of the role is updated.
    ///
    /// # Arguments
    ///
    /// * `organisation_id` - organisation owning the role
    /// * `role_id` - role within that organisation
    /// * `request` - flags to set, categories not listed stay unchanged
    pub async fn update_permissions(
        &self,
        organisation_id: &OrganisationId,
        role_id: &RoleId,
        request: UpdatePermissionsRequestDTO,
    ) -> Result<UpdatePermissionsResponseDTO, ServiceError> {
        get_active_organisation(&*self.organisation_repository, organisation_id).await?;

        let role = self
            .role_repository
            .get_organisation_role(
                role_id,
                organisation_id,
                &RoleRelations {
                    permissions: Some(PermissionRelations::default()),
                },
            )
            .await?
            .ok_or(EntityNotFoundError::Role(*role_id))?;

        let permission = role
            .permissions
            .ok_or(ServiceError::MappingError("permissions is None".to_string()))?
            .into_iter()
            .next()
            .ok_or(EntityNotFoundError::RolePermission(*role_id))?;

        let permission_id = permission.id;
        let affected = self
            .permission_repository
            .update_permission(update_permission_request(permission_id, request))
            .await
            .map_err(|error| InternalError::PermissionUpdate(error.to_string()))?;

        tracing::info!(
            %organisation_id,
            %role_id,
            %permission_id,
            affected,
            "Updated role permissions"
        );

        Ok(UpdatePermissionsResponseDTO::updated())
    }
}
