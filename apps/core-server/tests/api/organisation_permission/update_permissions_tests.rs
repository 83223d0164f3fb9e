use org_core::model::permission::PermissionCategory;
use serde_json::json;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_update_permissions_sets_given_flags() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    let role_id = context.db.roles.create(organisation_id, "Support").await;

    // WHEN
    let resp = context
        .api
        .permissions
        .update(
            &organisation_id,
            &role_id,
            json!({
                "canViewTransactions": true,
                "canLogRefunds": true,
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "Permissions successfully updated");
    assert_eq!(resp["statusCode"], 200);

    let permissions = context.db.roles.permissions(&role_id).await;
    assert_eq!(permissions.len(), 1);
    let permission = &permissions[0];
    for category in PermissionCategory::iter() {
        let expected = matches!(
            category,
            PermissionCategory::CanViewTransactions | PermissionCategory::CanLogRefunds
        );
        assert_eq!(permission.flag(category), expected, "{category}");
    }
}

#[tokio::test]
async fn test_update_permissions_keeps_omitted_flags() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    let role_id = context.db.roles.create(organisation_id, "Support").await;
    let api = &context.api.permissions;
    api.update(
        &organisation_id,
        &role_id,
        json!({ "canViewUsers": true, "canEditUsers": true }),
    )
    .await;

    // WHEN
    let resp = api
        .update(&organisation_id, &role_id, json!({ "canEditUsers": false }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let permission = &context.db.roles.permissions(&role_id).await[0];
    assert!(permission.flag(PermissionCategory::CanViewUsers));
    assert!(!permission.flag(PermissionCategory::CanEditUsers));
}

#[tokio::test]
async fn test_update_permissions_fails_on_role_of_other_organisation() {
    // GIVEN
    let (context, user_id, organisation_id) = TestContext::new_with_organisation().await;
    let other_id = context.db.organisations.create(user_id).await;
    let role_id = context.db.roles.create(other_id, "Support").await;

    // WHEN
    let resp = context
        .api
        .permissions
        .update(&organisation_id, &role_id, json!({ "canViewUsers": true }))
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0002");

    let permission = &context.db.roles.permissions(&role_id).await[0];
    assert!(!permission.flag(PermissionCategory::CanViewUsers));
}

#[tokio::test]
async fn test_update_permissions_fails_on_role_without_permissions() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    let role_id = context
        .db
        .roles
        .create_without_permissions(organisation_id, "Empty")
        .await;

    // WHEN
    let resp = context
        .api
        .permissions
        .update(&organisation_id, &role_id, json!({ "canViewUsers": true }))
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0003");
}

#[tokio::test]
async fn test_update_permissions_fails_on_unknown_or_deleted_organisation() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;
    let deleted_id = context.db.organisations.create_deleted(user_id).await;
    let role_id = context.db.roles.create(deleted_id, "Support").await;

    // WHEN
    let unknown = context
        .api
        .permissions
        .update(&Uuid::new_v4(), &role_id, json!({}))
        .await;
    let deleted = context
        .api
        .permissions
        .update(&deleted_id, &role_id, json!({}))
        .await;

    // THEN
    assert_eq!(unknown.status(), 404);
    assert_eq!(unknown.error_code().await, "BR_0001");
    assert_eq!(deleted.status(), 404);
    assert_eq!(deleted.error_code().await, "BR_0001");
}

#[tokio::test]
async fn test_update_permissions_fails_on_unknown_flag() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    let role_id = context.db.roles.create(organisation_id, "Support").await;

    // WHEN
    let resp = context
        .api
        .permissions
        .update(&organisation_id, &role_id, json!({ "canDeleteEverything": true }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0014");
}
