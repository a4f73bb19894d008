use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::role::RoleInfo,
    services::authorization::{get_user_permissions, get_user_role},
    state::AppState,
    types::UserId,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserAccessResponse {
    #[schema(value_type = i32)]
    pub user_id: UserId,
    pub role: Option<RoleInfo>,
    pub permissions: Vec<String>,
}

/// Role and permissions of any user. Mounted behind
/// `RequirePermission(admin_access)`.
pub async fn get_user_access(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<UserAccessResponse> {
    let role = get_user_role(state.authz(), user_id).await;
    let permissions = get_user_permissions(state.authz(), user_id).await;
    Json(UserAccessResponse {
        user_id,
        role,
        permissions,
    })
}
