use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_organisation_members_default_page() {
    // GIVEN
    let (context, owner_id, organisation_id) = TestContext::new_with_organisation().await;
    let member_id = context.db.users.create().await;
    context
        .db
        .members
        .add(member_id, organisation_id, None, 1)
        .await;

    // WHEN
    let resp = context
        .api
        .as_user(owner_id)
        .organisations
        .members(&organisation_id, None, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["message"], "members retrieved successfully");
    assert_eq!(resp["totalItems"], 2);

    let data = resp["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], owner_id.to_string());
    assert_eq!(data[1]["id"], member_id.to_string());
    assert_eq!(data[1]["firstName"], "John");
    assert_eq!(data[1]["lastName"], "Doe");
    assert_eq!(data[1]["phoneNumber"], "+41000000000");
}

#[tokio::test]
async fn test_get_organisation_members_pagination() {
    // GIVEN
    let (context, owner_id, organisation_id) = TestContext::new_with_organisation().await;
    let mut member_ids = vec![owner_id];
    for order in 1..5 {
        let member_id = context.db.users.create().await;
        context
            .db
            .members
            .add(member_id, organisation_id, None, order)
            .await;
        member_ids.push(member_id);
    }
    let api = context.api.as_user(owner_id);

    // WHEN
    let second = api
        .organisations
        .members(&organisation_id, Some(2), Some(2))
        .await
        .json_value()
        .await;
    let last = api
        .organisations
        .members(&organisation_id, Some(3), Some(2))
        .await
        .json_value()
        .await;
    let past_end = api
        .organisations
        .members(&organisation_id, Some(4), Some(2))
        .await
        .json_value()
        .await;

    // THEN
    assert_eq!(second["totalItems"], 5);
    let ids: Vec<_> = second["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|member| member["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![member_ids[2].to_string(), member_ids[3].to_string()]
    );

    assert_eq!(last["data"].as_array().unwrap().len(), 1);
    assert_eq!(last["data"][0]["id"], member_ids[4].to_string());

    assert_eq!(past_end["totalItems"], 5);
    assert!(past_end["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_organisation_members_fails_for_non_member() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;
    let outsider = context.db.users.create().await;

    // WHEN
    let resp = context
        .api
        .as_user(outsider)
        .organisations
        .members(&organisation_id, None, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.error_code().await, "BR_0006");
}

#[tokio::test]
async fn test_get_organisation_members_fails_on_invalid_paging() {
    // GIVEN
    let (context, owner_id, organisation_id) = TestContext::new_with_organisation().await;
    let api = context.api.as_user(owner_id);

    // WHEN
    let zero_page = api
        .organisations
        .members(&organisation_id, Some(0), None)
        .await;
    let zero_size = api
        .organisations
        .members(&organisation_id, None, Some(0))
        .await;
    let oversized = api
        .organisations
        .members(&organisation_id, None, Some(51))
        .await;

    // THEN
    assert_eq!(zero_page.status(), 400);
    assert_eq!(zero_page.error_code().await, "BR_0008");
    assert_eq!(zero_size.status(), 400);
    assert_eq!(zero_size.error_code().await, "BR_0009");
    assert_eq!(oversized.status(), 400);
    assert_eq!(oversized.error_code().await, "BR_0009");
}

#[tokio::test]
async fn test_get_organisation_members_fails_on_unknown_organisation() {
    // GIVEN
    let (context, user_id) = TestContext::new_with_user().await;

    // WHEN
    let resp = context
        .api
        .as_user(user_id)
        .organisations
        .members(&Uuid::new_v4(), None, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0001");
}

#[tokio::test]
async fn test_get_organisation_members_fails_without_user_header() {
    // GIVEN
    let (context, _, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api
        .organisations
        .members(&organisation_id, None, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_get_organisation_members_default_page_size_respects_configured_maximum() {
    // GIVEN
    let context = TestContext::new_with_max_page_size(3).await;
    let owner_id = context.db.users.create().await;
    let organisation_id = context.db.organisations.create(owner_id).await;
    for order in 1..5 {
        let member_id = context.db.users.create().await;
        context
            .db
            .members
            .add(member_id, organisation_id, None, order)
            .await;
    }

    // WHEN
    let resp = context
        .api
        .as_user(owner_id)
        .organisations
        .members(&organisation_id, None, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["totalItems"], 5);
    assert_eq!(resp["data"].as_array().unwrap().len(), 3);
}
