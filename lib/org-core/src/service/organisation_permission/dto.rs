use std::collections::HashMap;

use crate::model::permission::PermissionCategory;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatePermissionsRequestDTO {
    pub permission_list: HashMap<PermissionCategory, bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePermissionsResponseDTO {
    pub message: String,
    pub status_code: u16,
}
