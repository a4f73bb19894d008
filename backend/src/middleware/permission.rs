use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::auth::AuthContext,
    repositories::AuthorizationRepository,
    services::authorization::check_permission,
    state::AppState,
};

/// Guard that lets a request through only when the caller is an admin or
/// their role grants `permission_name`.
#[derive(Debug, Clone)]
pub struct RequirePermission {
    permission_name: String,
}

impl RequirePermission {
    pub fn new(permission_name: impl Into<String>) -> Self {
        Self {
            permission_name: permission_name.into(),
        }
    }

    pub fn permission_name(&self) -> &str {
        &self.permission_name
    }

    /// Returns the context unchanged on success, `AppError::Forbidden`
    /// otherwise.
    pub async fn check(
        &self,
        repo: &dyn AuthorizationRepository,
        auth: AuthContext,
    ) -> Result<AuthContext, AppError> {
        let user_id = auth.user_id();

        if auth.is_admin() {
            return Ok(auth);
        }

        if !check_permission(&self.permission_name, repo, user_id).await {
            tracing::warn!(
                user_id = ?user_id,
                permission = %self.permission_name,
                "Permission denied"
            );
            return Err(AppError::permission_denied());
        }

        Ok(auth)
    }
}

/// Middleware form of [`RequirePermission`]; install after `authenticate` with
/// `from_fn_with_state((state, RequirePermission::new(..)), require_permission)`.
pub async fn require_permission(
    State((state, guard)): State<(AppState, RequirePermission)>,
    auth: AuthContext,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth = guard.check(state.authz(), auth).await?;
    request.extensions_mut().insert(auth);
    Ok(next.run(request).await)
}
