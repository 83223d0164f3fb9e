use std::collections::HashMap;

use org_core::model::permission::PermissionCategory;
use org_core::service::organisation_permission::dto::UpdatePermissionsRequestDTO;

use super::dto::{PermissionListRestDTO, UpdatePermissionsRequestRestDTO};

impl From<UpdatePermissionsRequestRestDTO> for UpdatePermissionsRequestDTO {
    fn from(value: UpdatePermissionsRequestRestDTO) -> Self {
        Self {
            permission_list: value.permission_list.into(),
        }
    }
}

impl From<PermissionListRestDTO> for HashMap<PermissionCategory, bool> {
    fn from(value: PermissionListRestDTO) -> Self {
        [
            (
                PermissionCategory::CanViewTransactions,
                value.can_view_transactions,
            ),
            (PermissionCategory::CanViewRefunds, value.can_view_refunds),
            (PermissionCategory::CanLogRefunds, value.can_log_refunds),
            (PermissionCategory::CanViewUsers, value.can_view_users),
            (PermissionCategory::CanCreateUsers, value.can_create_users),
            (PermissionCategory::CanEditUsers, value.can_edit_users),
            (
                PermissionCategory::CanBlacklistWhitelistUsers,
                value.can_blacklist_whitelist_users,
            ),
        ]
        .into_iter()
        .filter_map(|(category, flag)| flag.map(|flag| (category, flag)))
        .collect()
    }
}
