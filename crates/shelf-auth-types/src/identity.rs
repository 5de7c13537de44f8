//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;
use uuid::Uuid;

use shelf_core::error::AppError;
use shelf_domain::id::AccountId;
use shelf_domain::role::Role;

pub const USER_ID_HEADER: &str = "x-shelf-user-id";
pub const USER_ROLE_HEADER: &str = "x-shelf-user-role";

/// Caller identity injected by the gateway via `x-shelf-user-id` and `x-shelf-user-role`.
///
/// Rejects with 401 if either header is absent or unparseable, or the role is
/// unknown. Role enforcement (403) is done by handlers via [`IdentityHeaders::require_admin`].
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: AccountId,
    pub role: Role,
}

impl IdentityHeaders {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            tracing::debug!(user_id = %self.user_id, "admin role required");
            Err(AppError::Forbidden)
        }
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; read the headers
    // synchronously so the returned future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok())
            .map(AccountId);

        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(Role::from_u8);

        async move {
            let user_id = user_id.ok_or(AppError::Unauthorized)?;
            let role = role.ok_or(AppError::Unauthorized)?;
            Ok(Self { user_id, role })
        }
    }
}
