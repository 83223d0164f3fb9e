use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use shared_types::OrganisationId;
use validator::Validate;

use super::dto::{
    CreateOrganisationRequestRestDTO, CreateOrganisationResponseRestDTO,
    GetOrganisationMembersQueryParams, GetOrganisationMembersResponseRestDTO,
    GetUserOrganisationsResponseRestDTO, UpdateOrganisationRequestRestDTO,
    UpdateOrganisationResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, ErrorResponse, OkOrErrorResponse,
};
use crate::extractor::Caller;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/organisations/v1",
    request_body = CreateOrganisationRequestRestDTO,
    responses(CreatedOrErrorResponse<CreateOrganisationResponseRestDTO>),
    params(
        ("X-User-Id" = String, Header, description = "Acting user id")
    ),
    tag = "organisation_management",
    summary = "Create organization",
    description = indoc::formatdoc! {"
        Creates an organization owned by the calling user. The caller also becomes
        the first member of the organization. The organization email must be unique.
    "},
)]
pub(crate) async fn post_organisation(
    state: State<AppState>,
    Caller(user_id): Caller,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateOrganisationRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreateOrganisationResponseRestDTO> {
    if let Err(error) = request.validate() {
        tracing::warn!("Request validation failure: {error}");
        return ErrorResponse::from(ErrorResponseRestDTO::from(error)).into();
    }

    let result = state
        .core
        .organisation_service
        .create_organisation(request.into(), &user_id)
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating organization")
}

#[utoipa::path(
    get,
    path = "/api/organisations/v1",
    responses(OkOrErrorResponse<GetUserOrganisationsResponseRestDTO>),
    params(
        ("X-User-Id" = String, Header, description = "Acting user id")
    ),
    tag = "organisation_management",
    summary = "List caller organizations",
    description = "Returns the organizations the caller created, owns or is a member of.",
)]
pub(crate) async fn get_user_organisations(
    state: State<AppState>,
    Caller(user_id): Caller,
) -> OkOrErrorResponse<GetUserOrganisationsResponseRestDTO> {
    let result = state
        .core
        .organisation_service
        .get_user_organisations(&user_id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting user organizations")
}

#[utoipa::path(
    patch,
    path = "/api/organisations/v1/{id}",
    request_body = UpdateOrganisationRequestRestDTO,
    responses(OkOrErrorResponse<UpdateOrganisationResponseRestDTO>),
    params(
        ("id" = OrganisationId, Path, description = "Organization id")
    ),
    tag = "organisation_management",
    summary = "Update organization",
    description = "Updates the provided fields of an organization. Omitted fields are left unchanged.",
)]
pub(crate) async fn patch_organisation(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<OrganisationId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateOrganisationRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<UpdateOrganisationResponseRestDTO> {
    if let Err(error) = request.validate() {
        tracing::warn!("Request validation failure: {error}");
        return ErrorResponse::from(ErrorResponseRestDTO::from(error)).into();
    }

    let result = state
        .core
        .organisation_service
        .update_organisation(&id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "updating organization")
}

#[utoipa::path(
    delete,
    path = "/api/organisations/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = OrganisationId, Path, description = "Organization id")
    ),
    tag = "organisation_management",
    summary = "Delete organization",
    description = "Marks an organization as deleted. Deleted organizations are no longer returned.",
)]
pub(crate) async fn delete_organisation(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<OrganisationId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .organisation_service
        .delete_organisation(&id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting organization")
}

#[utoipa::path(
    get,
    path = "/api/organisations/v1/{id}/members",
    responses(OkOrErrorResponse<GetOrganisationMembersResponseRestDTO>),
    params(
        ("id" = OrganisationId, Path, description = "Organization id"),
        ("X-User-Id" = String, Header, description = "Acting user id"),
        GetOrganisationMembersQueryParams
    ),
    tag = "organisation_management",
    summary = "List organization members",
    description = "Returns a page of organization members. Only members of the organization may list them.",
)]
pub(crate) async fn get_organisation_members(
    state: State<AppState>,
    Caller(user_id): Caller,
    WithRejection(Path(id), _): WithRejection<Path<OrganisationId>, ErrorResponseRestDTO>,
    WithRejection(Query(query), _): WithRejection<
        Query<GetOrganisationMembersQueryParams>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<GetOrganisationMembersResponseRestDTO> {
    let page_size = query.page_size_or_default(state.core.config.members.max_page_size);
    let result = state
        .core
        .organisation_service
        .get_organisation_members(&id, query.page, page_size, &user_id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting organization members")
}
