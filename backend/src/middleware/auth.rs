use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    config::Config,
    error::AppError,
    models::auth::AuthContext,
    state::AppState,
    utils::jwt::{verify_access_token, AuthError},
};

pub const ACCESS_COOKIE_NAME: &str = "access_token";

/// Verifies the caller's token and stores the resulting [`AuthContext`] in
/// the request extensions for guards and handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = authenticate_headers(request.headers(), &state.config).map_err(|err| {
        tracing::warn!(error = %err, "Rejected unauthenticated request");
        AppError::Unauthorized("Unauthorized".into())
    })?;

    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}

pub fn authenticate_headers(headers: &HeaderMap, config: &Config) -> Result<AuthContext, AuthError> {
    let token = extract_token(headers).ok_or(AuthError::MissingToken)?;
    let claims = verify_access_token(&token, &config.jwt_secret, config.jwt_algorithm)?;
    Ok(claims.into_auth_context())
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .map(str::to_owned);
    from_header.or_else(|| {
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| extract_cookie_value(raw, ACCESS_COOKIE_NAME))
    })
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim_start();
    (!token.is_empty()).then_some(token)
}

fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name && !value.is_empty()).then(|| value.trim().to_string())
    })
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".into()))
    }
}
