use shared_types::PermissionId;

use super::dto::{UpdatePermissionsRequestDTO, UpdatePermissionsResponseDTO};
use crate::model::permission::UpdatePermissionRequest;

pub(super) const PERMISSIONS_UPDATED_MESSAGE: &str = "Permissions successfully updated";

pub(super) fn update_permission_request(
    id: PermissionId,
    request: UpdatePermissionsRequestDTO,
) -> UpdatePermissionRequest {
    let mut update = UpdatePermissionRequest::new(id);
    for (category, value) in request.permission_list {
        update.set(category, value);
    }
    update
}

impl UpdatePermissionsResponseDTO {
    pub(super) fn updated() -> Self {
        Self {
            message: PERMISSIONS_UPDATED_MESSAGE.to_string(),
            status_code: 200,
        }
    }
}
