#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{admin::UserAccessResponse, me::PermissionsResponse},
    models::{
        card::{CardData, CreateCardRequest, UpdateCardRequest},
        permission::Permission,
        role::RoleInfo,
        PaginatedResponse,
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        my_permissions_doc,
        my_role_doc,
        get_card_doc,
        update_card_doc,
        delete_card_doc,
        list_user_cards_doc,
        create_user_card_doc,
        admin_user_access_doc
    ),
    components(
        schemas(
            Permission,
            PermissionsResponse,
            RoleInfo,
            CardData,
            CreateCardRequest,
            UpdateCardRequest,
            PaginatedResponse<CardData>,
            UserAccessResponse,
            ErrorResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Me", description = "Permissions and role of the caller"),
        (name = "Cards", description = "Card access guarded by ownership and permissions"),
        (name = "Admin", description = "Endpoints requiring admin_access")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    get,
    path = "/api/me/permissions",
    responses(
        (status = 200, body = PermissionsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Me"
)]
fn my_permissions_doc() {}

#[utoipa::path(
    get,
    path = "/api/me/role",
    responses(
        (status = 200, body = RoleInfo),
        (status = 404, description = "No role assigned", body = ErrorResponse)
    ),
    tag = "Me"
)]
fn my_role_doc() {}

#[utoipa::path(
    get,
    path = "/api/cards/{card_id}",
    params(("card_id" = i32, Path, description = "Card id")),
    responses(
        (status = 200, body = CardData),
        (status = 403, description = "Not owner, not admin, no view_any_user_cards", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse)
    ),
    tag = "Cards"
)]
fn get_card_doc() {}

#[utoipa::path(
    patch,
    path = "/api/cards/{card_id}",
    params(("card_id" = i32, Path, description = "Card id")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, body = CardData),
        (status = 400, description = "Inverted time window or unknown graph type", body = ErrorResponse),
        (status = 403, description = "Not owner, not admin, no edit_any_user_cards", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse)
    ),
    tag = "Cards"
)]
fn update_card_doc() {}

#[utoipa::path(
    delete,
    path = "/api/cards/{card_id}",
    params(("card_id" = i32, Path, description = "Card id")),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 403, description = "Not owner, not admin, no delete_any_user_cards", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse)
    ),
    tag = "Cards"
)]
fn delete_card_doc() {}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/cards",
    params(
        ("user_id" = i32, Path, description = "Owner id"),
        crate::models::PaginationQuery
    ),
    responses(
        (status = 200, body = PaginatedResponse<CardData>),
        (status = 403, description = "Not self, not admin, no view_any_user_cards", body = ErrorResponse)
    ),
    tag = "Cards"
)]
fn list_user_cards_doc() {}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/cards",
    params(("user_id" = i32, Path, description = "Owner id")),
    request_body = CreateCardRequest,
    responses(
        (status = 201, body = CardData),
        (status = 400, description = "Inverted time window, unknown user or graph type", body = ErrorResponse),
        (status = 403, description = "Not self, not admin, no create_any_user_cards", body = ErrorResponse)
    ),
    tag = "Cards"
)]
fn create_user_card_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/users/{user_id}/access",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, body = UserAccessResponse),
        (status = 403, description = "Permission denied: Missing required permission", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_user_access_doc() {}
