//! Repository functions for card records.

use sqlx::PgPool;

use crate::{
    models::card::{CardData, CreateCardRequest, UpdateCardRequest},
    types::{CardId, UserId},
};

const CARD_COLUMNS: &str =
    "id, user_id, start_time, end_time, is_active, graph_type_id, created_at, updated_at";

pub async fn find_card(pool: &PgPool, card_id: CardId) -> Result<Option<CardData>, sqlx::Error> {
    let query = format!("SELECT {} FROM card_data WHERE id = $1", CARD_COLUMNS);
    sqlx::query_as::<_, CardData>(&query)
        .bind(card_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_cards_for_user(
    pool: &PgPool,
    user_id: UserId,
    limit: i64,
    offset: i64,
) -> Result<Vec<CardData>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM card_data WHERE user_id = $1 ORDER BY start_time DESC, id DESC LIMIT $2 OFFSET $3",
        CARD_COLUMNS
    );
    sqlx::query_as::<_, CardData>(&query)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count_cards_for_user(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM card_data WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn insert_card(
    pool: &PgPool,
    owner_id: UserId,
    card: &CreateCardRequest,
) -> Result<CardData, sqlx::Error> {
    let query = format!(
        "INSERT INTO card_data (user_id, start_time, end_time, is_active, graph_type_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {}",
        CARD_COLUMNS
    );
    sqlx::query_as::<_, CardData>(&query)
        .bind(owner_id)
        .bind(card.start_time)
        .bind(card.end_time)
        .bind(card.is_active)
        .bind(card.graph_type_id)
        .fetch_one(pool)
        .await
}

/// Applies the provided fields and bumps `updated_at`. Returns `None` when the
/// card no longer exists.
pub async fn update_card(
    pool: &PgPool,
    card_id: CardId,
    changes: &UpdateCardRequest,
) -> Result<Option<CardData>, sqlx::Error> {
    let query = format!(
        "UPDATE card_data SET \
         start_time = COALESCE($2, start_time), \
         end_time = COALESCE($3, end_time), \
         is_active = COALESCE($4, is_active), \
         graph_type_id = COALESCE($5, graph_type_id), \
         updated_at = NOW() \
         WHERE id = $1 RETURNING {}",
        CARD_COLUMNS
    );
    sqlx::query_as::<_, CardData>(&query)
        .bind(card_id)
        .bind(changes.start_time)
        .bind(changes.end_time)
        .bind(changes.is_active)
        .bind(changes.graph_type_id)
        .fetch_optional(pool)
        .await
}

/// Deletes the card and reports whether a row was removed.
pub async fn delete_card(pool: &PgPool, card_id: CardId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM card_data WHERE id = $1")
        .bind(card_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
