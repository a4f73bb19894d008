use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    handlers,
    middleware::{authenticate, request_id, require_permission, RequirePermission},
    models::permission::ADMIN_ACCESS,
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    // Build public routes (no auth)
    let public_routes = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api/docs/openapi.json", ApiDoc::openapi()));

    // Build user-protected routes (auth required)
    let user_routes = Router::new()
        .route("/api/me/permissions", get(handlers::me::my_permissions))
        .route("/api/me/role", get(handlers::me::my_role))
        .route(
            "/api/cards/{card_id}",
            get(handlers::cards::get_card)
                .patch(handlers::cards::update_card)
                .delete(handlers::cards::delete_card),
        )
        .route(
            "/api/users/{user_id}/cards",
            get(handlers::cards::list_user_cards).post(handlers::cards::create_user_card),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    // Build admin routes (auth + admin_access permission, admins bypass)
    let admin_routes = Router::new()
        .route(
            "/api/admin/users/{user_id}/access",
            get(handlers::admin::get_user_access),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            (state.clone(), RequirePermission::new(ADMIN_ACCESS)),
            require_permission,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PATCH,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
