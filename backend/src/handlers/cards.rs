use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    models::{
        auth::AuthContext,
        card::{CardData, CreateCardRequest, UpdateCardRequest},
        permission::{
            CREATE_ANY_USER_CARDS, DELETE_ANY_USER_CARDS, EDIT_ANY_USER_CARDS,
            VIEW_ANY_USER_CARDS,
        },
        PaginatedResponse, PaginationQuery,
    },
    repositories::card as card_repo,
    services::authorization::{can_access_card, can_act_for_owner},
    state::AppState,
    types::{CardId, UserId},
};

pub async fn get_card(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(card_id): Path<CardId>,
) -> Result<Json<CardData>, AppError> {
    if !can_access_card(state.authz(), card_id, &auth).await {
        tracing::warn!(user_id = ?auth.user_id(), %card_id, "User not authorized to view card");
        return Err(AppError::Forbidden(
            "Not authorized to view this card".into(),
        ));
    }

    let card = card_repo::find_card(&state.pool, card_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))?;
    Ok(Json(card))
}

pub async fn list_user_cards(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(user_id): Path<UserId>,
    Query(page): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<CardData>>, AppError> {
    if !can_act_for_owner(state.authz(), &auth, user_id, VIEW_ANY_USER_CARDS).await {
        return Err(AppError::Forbidden(
            "Not authorized to view this user's cards".into(),
        ));
    }

    let (limit, offset) = (page.limit(), page.offset());
    let cards = card_repo::list_cards_for_user(&state.pool, user_id, limit, offset).await?;
    let total = card_repo::count_cards_for_user(&state.pool, user_id).await?;
    Ok(Json(PaginatedResponse::new(cards, total, limit, offset)))
}

pub async fn create_user_card(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(user_id): Path<UserId>,
    Json(payload): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardData>), AppError> {
    if !can_act_for_owner(state.authz(), &auth, user_id, CREATE_ANY_USER_CARDS).await {
        tracing::warn!(user_id = ?auth.user_id(), owner_id = %user_id, "User not authorized to create card");
        return Err(AppError::Forbidden(
            "Not authorized to create cards for this user".into(),
        ));
    }

    if !payload.has_valid_window() {
        return Err(AppError::BadRequest(
            "end_time must not be before start_time".into(),
        ));
    }

    let card = card_repo::insert_card(&state.pool, user_id, &payload)
        .await
        .map_err(reference_error)?;
    tracing::info!(user_id = ?auth.user_id(), card_id = %card.id, owner_id = %user_id, "Card created");
    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn update_card(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(card_id): Path<CardId>,
    Json(payload): Json<UpdateCardRequest>,
) -> Result<Json<CardData>, AppError> {
    let card = card_repo::find_card(&state.pool, card_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))?;

    if !can_act_for_owner(state.authz(), &auth, card.user_id, EDIT_ANY_USER_CARDS).await {
        tracing::warn!(user_id = ?auth.user_id(), %card_id, "User not authorized to update card");
        return Err(AppError::Forbidden(
            "Not authorized to update this card".into(),
        ));
    }

    if !payload.has_valid_window_for(&card) {
        return Err(AppError::BadRequest(
            "end_time must not be before start_time".into(),
        ));
    }

    let updated = card_repo::update_card(&state.pool, card_id, &payload)
        .await
        .map_err(reference_error)?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))?;
    tracing::info!(user_id = ?auth.user_id(), %card_id, owner_id = %card.user_id, "Card updated");
    Ok(Json(updated))
}

pub async fn delete_card(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(card_id): Path<CardId>,
) -> Result<StatusCode, AppError> {
    let card = card_repo::find_card(&state.pool, card_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".into()))?;

    if !can_act_for_owner(state.authz(), &auth, card.user_id, DELETE_ANY_USER_CARDS).await {
        return Err(AppError::Forbidden(
            "Not authorized to delete this card".into(),
        ));
    }

    if !card_repo::delete_card(&state.pool, card_id).await? {
        return Err(AppError::NotFound("Card not found".into()));
    }
    tracing::info!(user_id = ?auth.user_id(), %card_id, owner_id = %card.user_id, "Card deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// A missing owner or graph type surfaces as a foreign key violation.
fn reference_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::BadRequest("Unknown user or graph type".into());
        }
    }
    err.into()
}
