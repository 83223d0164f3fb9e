use shared_types::{OrganisationId, RoleId, UserId};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::model::organisation::Organisation;
use crate::model::organisation_member::OrganisationMember;
use crate::model::permission::Permission;
use crate::model::role::Role;
use crate::model::user::User;

pub(crate) fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub(crate) fn dummy_organisation(id: Option<OrganisationId>) -> Organisation {
    let owner_id: UserId = Uuid::new_v4().into();
    Organisation {
        id: id.unwrap_or(Uuid::new_v4().into()),
        name: "Acme".to_string(),
        description: "Payments".to_string(),
        email: "contact@acme.test".to_string(),
        industry: "fintech".to_string(),
        organisation_type: "company".to_string(),
        country: "NG".to_string(),
        address: "1 Marina".to_string(),
        state: "Lagos".to_string(),
        owner_id,
        creator_id: owner_id,
        is_deleted: false,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        roles: None,
    }
}

pub(crate) fn dummy_permission(role_id: RoleId) -> Permission {
    Permission {
        id: Uuid::new_v4().into(),
        role_id,
        can_view_transactions: false,
        can_view_refunds: false,
        can_log_refunds: false,
        can_view_users: false,
        can_create_users: false,
        can_edit_users: false,
        can_blacklist_whitelist_users: false,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
    }
}

pub(crate) fn dummy_role(
    organisation_id: OrganisationId,
    permissions: Option<Vec<Permission>>,
) -> Role {
    Role {
        id: Uuid::new_v4().into(),
        name: "admin".to_string(),
        description: Some("Administrator".to_string()),
        organisation_id,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        permissions,
    }
}

pub(crate) fn dummy_user(id: Option<UserId>) -> User {
    User {
        id: id.unwrap_or(Uuid::new_v4().into()),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@acme.test".to_string(),
        phone_number: None,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        created_organisations: None,
        owned_organisations: None,
    }
}

pub(crate) fn dummy_member(user: User, organisation_id: OrganisationId) -> OrganisationMember {
    OrganisationMember {
        id: Uuid::new_v4().into(),
        user_id: user.id,
        organisation_id,
        role_id: None,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        user: Some(user),
        organisation: None,
        role: None,
    }
}
