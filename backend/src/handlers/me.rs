use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::{auth::AuthContext, role::RoleInfo},
    services::authorization::{get_user_permissions, get_user_role},
    state::AppState,
    types::UserId,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionsResponse {
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<UserId>,
    pub is_admin: bool,
    pub permissions: Vec<String>,
}

pub async fn my_permissions(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Json<PermissionsResponse> {
    let permissions = match auth.user_id() {
        Some(user_id) => get_user_permissions(state.authz(), user_id).await,
        None => Vec::new(),
    };
    Json(PermissionsResponse {
        user_id: auth.user_id(),
        is_admin: auth.is_admin(),
        permissions,
    })
}

pub async fn my_role(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<RoleInfo>, AppError> {
    let user_id = auth
        .user_id()
        .ok_or_else(|| AppError::NotFound("No role assigned".into()))?;
    get_user_role(state.authz(), user_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No role assigned".into()))
}
