use shared_types::{PermissionId, RoleId};
use strum::{Display, EnumIter, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Permission {
    pub id: PermissionId,
    pub role_id: RoleId,
    pub can_view_transactions: bool,
    pub can_view_refunds: bool,
    pub can_log_refunds: bool,
    pub can_view_users: bool,
    pub can_create_users: bool,
    pub can_edit_users: bool,
    pub can_blacklist_whitelist_users: bool,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PermissionRelations {}

/// Capability flag carried by every permission record
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum PermissionCategory {
    CanViewTransactions,
    CanViewRefunds,
    CanLogRefunds,
    CanViewUsers,
    CanCreateUsers,
    CanEditUsers,
    CanBlacklistWhitelistUsers,
}

/// Partial update of a single permission record, `None` flags are left untouched
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdatePermissionRequest {
    pub id: PermissionId,
    pub can_view_transactions: Option<bool>,
    pub can_view_refunds: Option<bool>,
    pub can_log_refunds: Option<bool>,
    pub can_view_users: Option<bool>,
    pub can_create_users: Option<bool>,
    pub can_edit_users: Option<bool>,
    pub can_blacklist_whitelist_users: Option<bool>,
}

impl UpdatePermissionRequest {
    pub fn new(id: PermissionId) -> Self {
        Self {
            id,
            can_view_transactions: None,
            can_view_refunds: None,
            can_log_refunds: None,
            can_view_users: None,
            can_create_users: None,
            can_edit_users: None,
            can_blacklist_whitelist_users: None,
        }
    }

    pub fn set(&mut self, category: PermissionCategory, value: bool) {
        let flag = match category {
            PermissionCategory::CanViewTransactions => &mut self.can_view_transactions,
            PermissionCategory::CanViewRefunds => &mut self.can_view_refunds,
            PermissionCategory::CanLogRefunds => &mut self.can_log_refunds,
            PermissionCategory::CanViewUsers => &mut self.can_view_users,
            PermissionCategory::CanCreateUsers => &mut self.can_create_users,
            PermissionCategory::CanEditUsers => &mut self.can_edit_users,
            PermissionCategory::CanBlacklistWhitelistUsers => {
                &mut self.can_blacklist_whitelist_users
            }
        };
        *flag = Some(value);
    }
}

impl Permission {
    pub fn flag(&self, category: PermissionCategory) -> bool {
        match category {
            PermissionCategory::CanViewTransactions => self.can_view_transactions,
            PermissionCategory::CanViewRefunds => self.can_view_refunds,
            PermissionCategory::CanLogRefunds => self.can_log_refunds,
            PermissionCategory::CanViewUsers => self.can_view_users,
            PermissionCategory::CanCreateUsers => self.can_create_users,
            PermissionCategory::CanEditUsers => self.can_edit_users,
            PermissionCategory::CanBlacklistWhitelistUsers => self.can_blacklist_whitelist_users,
        }
    }
}
