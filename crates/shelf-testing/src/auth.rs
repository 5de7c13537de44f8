//! Mock identity for router tests.
//!
//! Services behind the gateway receive `x-shelf-user-id` + `x-shelf-user-role`
//! headers. Tests inject them directly so no real gateway is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use shelf_auth_types::identity::{USER_ID_HEADER, USER_ROLE_HEADER};
use shelf_domain::id::AccountId;
use shelf_domain::role::Role;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: AccountId,
    pub role: Role,
}

impl MockAuth {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self {
            user_id: AccountId(user_id),
            role,
        }
    }

    pub fn reader(user_id: Uuid) -> Self {
        Self::new(user_id, Role::Reader)
    }

    pub fn admin() -> Self {
        Self::new(Uuid::now_v7(), Role::Admin)
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static(USER_ROLE_HEADER),
            HeaderValue::from(u16::from(self.role.as_u8())),
        );
        map
    }

    /// `(name, value)` pairs for builders that take headers one at a time.
    pub fn header_pairs(&self) -> Vec<(HeaderName, HeaderValue)> {
        self.headers()
            .into_iter()
            .filter_map(|(name, value)| name.map(|n| (n, value)))
            .collect()
    }
}
