use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    let context = TestContext::new().await;

    let resp = context.api.other.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new().await;

    let resp = context.api.other.build_info().await;

    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_metrics_are_exposed() {
    let context = TestContext::new().await;
    context.api.other.health().await;

    let resp = context.api.other.metrics().await;

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_openapi_documentation_lists_organisation_endpoints() {
    let context = TestContext::new().await;

    let resp = context.api.other.openapi().await;

    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let paths = resp["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/organisations/v1"));
    assert!(paths.contains_key("/api/organisations/v1/{id}/members"));
    assert!(paths.contains_key("/api/organisations/v1/{orgId}/roles/{roleId}/permissions"));
}
