use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::api_clients::organisations::UpdateParams;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_update_organisation_changes_given_fields_only() {
    // GIVEN
    let (context, user_id, organisation_id) = TestContext::new_with_organisation().await;
    let before = context.db.organisations.get(&organisation_id).await;

    // WHEN
    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .update(
            &organisation_id,
            UpdateParams {
                name: Some("Renamed".to_string()),
                country: Some("Austria".to_string()),
                ..Default::default()
            },
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "Organisation successfully updated");
    assert_eq!(resp["org"]["name"], "Renamed");
    assert_eq!(resp["org"]["country"], "Austria");
    assert_eq!(resp["org"]["email"], before.email.as_str());

    let after = context.db.organisations.get(&organisation_id).await;
    assert_eq!(after.name, "Renamed");
    assert_eq!(after.country, "Austria");
    assert_eq!(after.email, before.email);
    assert_eq!(after.industry, before.industry);
    assert!(after.last_modified > before.last_modified);
}

#[tokio::test]
async fn test_update_organisation_fails_on_taken_email() {
    // GIVEN
    let (context, user_id, organisation_id) = TestContext::new_with_organisation().await;
    let other_id = context.db.organisations.create(user_id).await;
    let other = context.db.organisations.get(&other_id).await;

    // WHEN
    let resp = context
        .api
        .organisations
        .update(
            &organisation_id,
            UpdateParams {
                email: Some(other.email),
                ..Default::default()
            },
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.error_code().await, "BR_0005");
}

#[tokio::test]
async fn test_update_organisation_keeps_own_email() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    let organisation = context.db.organisations.get(&organisation_id).await;

    // WHEN
    let resp = context
        .api
        .organisations
        .update(
            &organisation_id,
            UpdateParams {
                email: Some(organisation.email),
                ..Default::default()
            },
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_update_organisation_fails_on_unknown_or_deleted() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;
    let deleted_id = context.db.organisations.create_deleted(user_id).await;

    // WHEN
    let unknown = context
        .api
        .organisations
        .update(&Uuid::new_v4(), Default::default())
        .await;
    let deleted = context
        .api
        .organisations
        .update(&deleted_id, Default::default())
        .await;

    // THEN
    assert_eq!(unknown.status(), 404);
    assert_eq!(unknown.error_code().await, "BR_0001");
    assert_eq!(deleted.status(), 404);
}

#[tokio::test]
async fn test_update_organisation_fails_on_malformed_id() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .organisations
        .update(&"not-a-uuid", Default::default())
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0014");
}
