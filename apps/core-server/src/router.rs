use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use org_core::OrgCore;
use org_core::config::core_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{misc, organisation, organisation_permission};
use crate::middleware::get_http_request_context;
use crate::{ServerConfig, build_info, dto, endpoint};

pub(crate) struct InternalAppState {
    pub core: OrgCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener non-blocking");

    let core = OrgCore::new(Arc::new(DataLayer::build(db_conn)), config.core);

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.clone(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, &config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("Failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route(
            "/api/organisations/v1",
            get(organisation::controller::get_user_organisations)
                .post(organisation::controller::post_organisation),
        )
        .route(
            "/api/organisations/v1/{id}",
            patch(organisation::controller::patch_organisation)
                .delete(organisation::controller::delete_organisation),
        )
        .route(
            "/api/organisations/v1/{id}/members",
            get(organisation::controller::get_organisation_members),
        )
        .route(
            "/api/organisations/v1/{orgId}/roles/{roleId}/permissions",
            patch(organisation_permission::controller::patch_role_permissions),
        );

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    let mut router = Router::new().merge(api).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let context = get_http_request_context(request);
                info_span!(
                    "http_request",
                    method = context.method,
                    path = context.path,
                    service = "org-core",
                    RequestId = context.request_id,
                    UserId = context.user_id,
                )
            })
            .on_request(|request: &Request<_>, _span: &Span| {
                tracing::debug!(
                    "SERVICE CALL START {} {}",
                    request.method(),
                    request.uri().path()
                )
            })
            .on_failure(|_, _, _: &_| {}) // failures are logged by the error responses
            .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                tracing::debug!("SERVICE CALL END {}", response.status())
            }),
    );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

pub fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::organisation::controller::post_organisation,
            endpoint::organisation::controller::get_user_organisations,
            endpoint::organisation::controller::patch_organisation,
            endpoint::organisation::controller::delete_organisation,
            endpoint::organisation::controller::get_organisation_members,

            endpoint::organisation_permission::controller::patch_role_permissions,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::organisation::dto::CreateOrganisationRequestRestDTO,
                endpoint::organisation::dto::CreateOrganisationResponseRestDTO,
                endpoint::organisation::dto::UpdateOrganisationRequestRestDTO,
                endpoint::organisation::dto::UpdateOrganisationResponseRestDTO,
                endpoint::organisation::dto::OrganisationResponseRestDTO,
                endpoint::organisation::dto::GetOrganisationMembersResponseRestDTO,
                endpoint::organisation::dto::OrganisationMemberRestDTO,
                endpoint::organisation::dto::GetUserOrganisationsResponseRestDTO,
                endpoint::organisation::dto::UserOrganisationsRestDTO,
                endpoint::organisation::dto::MemberOrganisationRestDTO,
                endpoint::organisation::dto::MemberRoleRestDTO,

                endpoint::organisation_permission::dto::UpdatePermissionsRequestRestDTO,
                endpoint::organisation_permission::dto::PermissionListRestDTO,
                endpoint::organisation_permission::dto::UpdatePermissionsResponseRestDTO,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::OrganisationId,
                shared_types::RoleId,
                shared_types::UserId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "organisation_management", description = "Organization management"),
            (name = "organisation_permission", description = "Role permission management"),
        )
    )]
    struct ApiDoc;

    let mut docs = ApiDoc::openapi();
    docs.info.version = app_version();

    docs
}

fn app_version() -> String {
    format!("{}-{}", build_info::PKG_VERSION, build_info::SHORT_COMMIT)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
