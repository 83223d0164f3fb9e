use serde_json::json;
use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::fixtures::unique_email;
use crate::utils::api_clients::organisations::CreateParams;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_organisation_success() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;
    let email = unique_email("acme");

    // WHEN
    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .create(CreateParams {
            email: Some(&email),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["status"], "success");
    assert_eq!(resp["message"], "organisation created successfully");
    assert_eq!(resp["data"]["name"], "Acme Payments");
    assert_eq!(resp["data"]["email"], email.as_str());
    assert_eq!(resp["data"]["organisationType"], "Private");
    assert_eq!(resp["data"]["ownerId"], user_id.to_string());
    assert_eq!(resp["data"]["creatorId"], user_id.to_string());

    let organisation_id = resp["data"]["id"].as_str().unwrap().parse().unwrap();
    let organisation = context.db.organisations.get(&organisation_id).await;
    assert_eq!(organisation.owner_id, user_id);
    assert!(!organisation.is_deleted);

    let members = context.db.members.list(&organisation_id).await;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, user_id);
    assert_eq!(members[0].role_id, None);
}

#[tokio::test]
async fn test_create_organisation_fails_on_duplicate_email() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;
    let api = context.api.as_user(user_id);
    let email = unique_email("acme");
    let params = || CreateParams {
        email: Some(&email),
        ..Default::default()
    };
    assert_eq!(api.organisations.create(params()).await.status(), 201);

    // WHEN
    let resp = api.organisations.create(params()).await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.error_code().await, "BR_0005");
}

#[tokio::test]
async fn test_create_organisation_fails_on_email_of_deleted_organisation() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;
    let api = context.api.as_user(user_id);
    let email = unique_email("acme");

    let resp = api
        .organisations
        .create(CreateParams {
            email: Some(&email),
            ..Default::default()
        })
        .await
        .json_value()
        .await;
    let organisation_id = resp["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(api.organisations.delete(&organisation_id).await.status(), 204);

    // WHEN
    let resp = api
        .organisations
        .create(CreateParams {
            email: Some(&email),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn test_create_organisation_fails_without_user_header() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.organisations.create(Default::default()).await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.error_code().await, "BR_0013");
}

#[tokio::test]
async fn test_create_organisation_fails_on_malformed_user_header() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .as_user("not-a-uuid")
        .organisations
        .create(Default::default())
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_create_organisation_fails_on_unknown_user() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .as_user(Uuid::new_v4())
        .organisations
        .create(CreateParams {
            email: Some(&unique_email("acme")),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0004");
}

#[tokio::test]
async fn test_create_organisation_fails_on_invalid_email() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;

    // WHEN
    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .create(CreateParams {
            email: Some("not an email"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0014");
}

#[tokio::test]
async fn test_create_organisation_fails_on_blank_name() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;

    // WHEN
    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .create(CreateParams {
            name: Some("   "),
            email: Some(&unique_email("acme")),
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0014");
}

#[tokio::test]
async fn test_create_organisation_fails_on_missing_and_unknown_fields() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;
    let api = context.api.as_user(user_id);

    // WHEN
    let missing = api
        .organisations
        .create_raw(json!({ "name": "Acme Payments" }))
        .await;
    let unknown = api
        .organisations
        .create_raw(json!({
            "name": "Acme Payments",
            "description": "Payment processing",
            "email": unique_email("acme"),
            "industry": "Fintech",
            "organisationType": "Private",
            "country": "Switzerland",
            "address": "Bahnhofstrasse 1",
            "state": "Zurich",
            "ownerId": Uuid::new_v4(),
        }))
        .await;

    // THEN
    assert_eq!(missing.status(), 400);
    assert_eq!(missing.error_code().await, "BR_0014");
    assert_eq!(unknown.status(), 400);
    assert_eq!(unknown.error_code().await, "BR_0014");
}
