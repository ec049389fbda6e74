//! Caller identity supplied by the fronting authentication layer

use crate::ApiError;

use mh_hub::{TenantId, UserId};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const TENANT_ID_HEADER: &str = "X-Tenant-Id";
pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_NAME_HEADER: &str = "X-User-Name";

/// Authenticated staff member making the request.
///
/// Tenant and user ids are required positive integers. The display name is
/// optional and falls back to `user-{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub tenant_id: TenantId,
    pub user_id: UserId,
    pub user_name: String,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let tenant_id = required_id(parts, TENANT_ID_HEADER)?;
            let user_id = required_id(parts, USER_ID_HEADER)?;

            let user_name = parts
                .headers
                .get(USER_NAME_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("user-{}", user_id));

            Ok(Identity {
                tenant_id,
                user_id,
                user_name,
            })
        }
    }
}

fn required_id(parts: &Parts, header: &str) -> Result<i64, ApiError> {
    let raw = parts
        .headers
        .get(header)
        .ok_or_else(|| ApiError::unauthorized(format!("Missing {} header", header)))?;

    let value = raw
        .to_str()
        .map_err(|_| ApiError::unauthorized(format!("Invalid {} header", header)))?;

    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            log::debug!("Rejected {} header value: {}", header, value);
            Err(ApiError::unauthorized(format!("Invalid {} header", header)))
        }
    }
}
