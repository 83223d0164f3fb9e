use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::{OrganisationId, RoleId};

use super::dto::{UpdatePermissionsRequestRestDTO, UpdatePermissionsResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    patch,
    path = "/api/organisations/v1/{orgId}/roles/{roleId}/permissions",
    request_body = UpdatePermissionsRequestRestDTO,
    responses(OkOrErrorResponse<UpdatePermissionsResponseRestDTO>),
    params(
        ("orgId" = OrganisationId, Path, description = "Organization id"),
        ("roleId" = RoleId, Path, description = "Role id")
    ),
    tag = "organisation_permission",
    summary = "Update role permissions",
    description = indoc::formatdoc! {"
        Sets the permission flags of a role. Only the flags present in the request
        are changed.
    "},
)]
pub(crate) async fn patch_role_permissions(
    state: State<AppState>,
    WithRejection(Path((organisation_id, role_id)), _): WithRejection<
        Path<(OrganisationId, RoleId)>,
        ErrorResponseRestDTO,
    >,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdatePermissionsRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<UpdatePermissionsResponseRestDTO> {
    let result = state
        .core
        .organisation_permission_service
        .update_permissions(&organisation_id, &role_id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "updating role permissions")
}
