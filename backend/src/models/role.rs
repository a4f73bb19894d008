use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::RoleId;

/// Role assigned to a user, as returned by the role lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoleInfo {
    #[schema(value_type = i32)]
    pub id: RoleId,
    pub name: String,
    pub description: String,
}
