use org_core::model::permission::{Permission, UpdatePermissionRequest};
use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use time::OffsetDateTime;

use crate::entity::permission;
use crate::mapper::set_if_some;

impl From<permission::Model> for Permission {
    fn from(value: permission::Model) -> Self {
        Self {
            id: value.id,
            role_id: value.role_id,
            can_view_transactions: value.can_view_transactions,
            can_view_refunds: value.can_view_refunds,
            can_log_refunds: value.can_log_refunds,
            can_view_users: value.can_view_users,
            can_create_users: value.can_create_users,
            can_edit_users: value.can_edit_users,
            can_blacklist_whitelist_users: value.can_blacklist_whitelist_users,
            created_date: value.created_date,
            last_modified: value.last_modified,
        }
    }
}

/// The id is left unset, the update is targeted with an explicit filter
impl From<UpdatePermissionRequest> for permission::ActiveModel {
    fn from(value: UpdatePermissionRequest) -> Self {
        Self {
            id: NotSet,
            role_id: NotSet,
            can_view_transactions: set_if_some(value.can_view_transactions),
            can_view_refunds: set_if_some(value.can_view_refunds),
            can_log_refunds: set_if_some(value.can_log_refunds),
            can_view_users: set_if_some(value.can_view_users),
            can_create_users: set_if_some(value.can_create_users),
            can_edit_users: set_if_some(value.can_edit_users),
            can_blacklist_whitelist_users: set_if_some(value.can_blacklist_whitelist_users),
            created_date: NotSet,
            last_modified: Set(OffsetDateTime::now_utc()),
        }
    }
}
