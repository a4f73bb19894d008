//! Permission names stored in the `permission` table.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const VIEW_ANY_USER_CARDS: &str = "view_any_user_cards";
pub const CREATE_ANY_USER_CARDS: &str = "create_any_user_cards";
pub const DELETE_ANY_USER_CARDS: &str = "delete_any_user_cards";
pub const EDIT_ANY_USER_CARDS: &str = "edit_any_user_cards";
pub const ADMIN_ACCESS: &str = "admin_access";

/// Well-known permissions the API checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewAnyUserCards,
    CreateAnyUserCards,
    DeleteAnyUserCards,
    EditAnyUserCards,
    AdminAccess,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::ViewAnyUserCards,
        Permission::CreateAnyUserCards,
        Permission::DeleteAnyUserCards,
        Permission::EditAnyUserCards,
        Permission::AdminAccess,
    ];

    /// Returns the name as stored in `permission.name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewAnyUserCards => VIEW_ANY_USER_CARDS,
            Permission::CreateAnyUserCards => CREATE_ANY_USER_CARDS,
            Permission::DeleteAnyUserCards => DELETE_ANY_USER_CARDS,
            Permission::EditAnyUserCards => EDIT_ANY_USER_CARDS,
            Permission::AdminAccess => ADMIN_ACCESS,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}
