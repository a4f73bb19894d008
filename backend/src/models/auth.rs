//! Identity of the caller as established by the authentication middleware.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

pub const ADMIN_ROLE: &str = "admin";

/// Authenticated-user context handed to authorization checks.
///
/// `user_id` is optional because a token may carry roles without a resolvable
/// subject; every check treats a missing id as "no permission".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthContext {
    pub fn new(user_id: Option<UserId>, roles: Vec<String>) -> Self {
        Self { user_id, roles }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role.trim().eq_ignore_ascii_case(ADMIN_ROLE))
    }
}
