use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_delete_organisation_marks_as_deleted() {
    // GIVEN
    let (context, user_id, organisation_id) = TestContext::new_with_organisation().await;
    let kept_id = context.db.organisations.create(user_id).await;

    // WHEN
    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .delete(&organisation_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 204);

    let organisation = context.db.organisations.get(&organisation_id).await;
    assert!(organisation.is_deleted);

    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .list()
        .await
        .json_value()
        .await;
    let created = resp["data"]["createdOrganisations"].as_array().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["id"], kept_id.to_string());
}

#[tokio::test]
async fn test_delete_organisation_twice_fails() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    assert_eq!(
        context
            .api
            .organisations
            .delete(&organisation_id)
            .await
            .status(),
        204
    );

    // WHEN
    let resp = context.api.organisations.delete(&organisation_id).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0001");
}

#[tokio::test]
async fn test_delete_unknown_organisation_fails() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.organisations.delete(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
}
