use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shared_types::UserId;

use crate::dto::response::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Acting user, as forwarded by the gateway in the `X-User-Id` header
#[derive(Clone, Copy, Debug)]
pub struct Caller(pub UserId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(USER_ID_HEADER) else {
            tracing::warn!("{USER_ID_HEADER} header not found.");
            return Err(ErrorResponse::unauthorized("Missing user id header"));
        };

        let user_id = header
            .to_str()
            .ok()
            .and_then(|value| value.parse::<UserId>().ok())
            .ok_or_else(|| {
                tracing::warn!("Could not parse {USER_ID_HEADER} header.");
                ErrorResponse::unauthorized("Invalid user id header")
            })?;

        Ok(Self(user_id))
    }
}
