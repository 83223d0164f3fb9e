use one_dto_mapper::From;
use org_core::service::organisation_permission::dto::UpdatePermissionsResponseDTO;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdatePermissionsRequestRestDTO {
    pub permission_list: PermissionListRestDTO,
}

/// Flags to change, omitted flags keep their stored value
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct PermissionListRestDTO {
    #[schema(nullable = false)]
    pub can_view_transactions: Option<bool>,
    #[schema(nullable = false)]
    pub can_view_refunds: Option<bool>,
    #[schema(nullable = false)]
    pub can_log_refunds: Option<bool>,
    #[schema(nullable = false)]
    pub can_view_users: Option<bool>,
    #[schema(nullable = false)]
    pub can_create_users: Option<bool>,
    #[schema(nullable = false)]
    pub can_edit_users: Option<bool>,
    #[schema(nullable = false)]
    pub can_blacklist_whitelist_users: Option<bool>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(UpdatePermissionsResponseDTO)]
pub(crate) struct UpdatePermissionsResponseRestDTO {
    #[schema(example = "Permissions successfully updated")]
    pub message: String,
    #[schema(example = 200)]
    pub status_code: u16,
}
