use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use shared_types::{OrganisationId, OrganisationMemberId, PermissionId, RoleId, UserId};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::entity::{organisation, organisation_member, permission, role, user};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db = db_conn(database_url).await.unwrap();
    DataLayer::build(db)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}

pub fn data_layer_connection(data_layer: &DataLayer) -> DatabaseConnection {
    data_layer.db.clone()
}

pub async fn insert_user(database: &DatabaseConnection, email: &str) -> Result<UserId, DbErr> {
    let user = user::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        first_name: Set("John".to_string()),
        last_name: Set("Doe".to_string()),
        email: Set(email.to_owned()),
        phone_number: Set(Some("+41000000000".to_string())),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
    }
    .insert(database)
    .await?;

    Ok(user.id)
}

pub async fn insert_organisation(
    database: &DatabaseConnection,
    email: &str,
    owner_id: UserId,
    is_deleted: bool,
) -> Result<OrganisationId, DbErr> {
    let organisation = organisation::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set(format!("organisation {email}")),
        description: Set("description".to_string()),
        email: Set(email.to_owned()),
        industry: Set("Fintech".to_string()),
        organisation_type: Set("Company".to_string()),
        country: Set("Switzerland".to_string()),
        address: Set("Bahnhofstrasse 1".to_string()),
        state: Set("Zurich".to_string()),
        owner_id: Set(owner_id),
        creator_id: Set(owner_id),
        is_deleted: Set(is_deleted),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
    }
    .insert(database)
    .await?;

    Ok(organisation.id)
}

pub async fn insert_role(
    database: &DatabaseConnection,
    name: &str,
    organisation_id: OrganisationId,
) -> Result<RoleId, DbErr> {
    let role = role::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        name: Set(name.to_owned()),
        description: Set(Some(format!("{name} role"))),
        organisation_id: Set(organisation_id),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
    }
    .insert(database)
    .await?;

    Ok(role.id)
}

/// Inserts a permission record with every flag cleared
pub async fn insert_permission(
    database: &DatabaseConnection,
    role_id: RoleId,
) -> Result<PermissionId, DbErr> {
    let permission = permission::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        role_id: Set(role_id),
        can_view_transactions: Set(false),
        can_view_refunds: Set(false),
        can_log_refunds: Set(false),
        can_view_users: Set(false),
        can_create_users: Set(false),
        can_edit_users: Set(false),
        can_blacklist_whitelist_users: Set(false),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
    }
    .insert(database)
    .await?;

    Ok(permission.id)
}

/// `order` shifts the creation date so that members come back in insertion order
pub async fn insert_member(
    database: &DatabaseConnection,
    user_id: UserId,
    organisation_id: OrganisationId,
    role_id: Option<RoleId>,
    order: i64,
) -> Result<OrganisationMemberId, DbErr> {
    let created_date = get_dummy_date() + Duration::seconds(order);

    let member = organisation_member::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        user_id: Set(user_id),
        organisation_id: Set(organisation_id),
        role_id: Set(role_id),
        created_date: Set(created_date),
        last_modified: Set(created_date),
    }
    .insert(database)
    .await?;

    Ok(member.id)
}

pub(crate) async fn get_permission(
    database: &DatabaseConnection,
    id: PermissionId,
) -> Result<Option<permission::Model>, DbErr> {
    permission::Entity::find_by_id(id).one(database).await
}
