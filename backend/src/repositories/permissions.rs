//! Raw RBAC queries. Every function here propagates `sqlx::Error`; the
//! fail-closed interpretation lives in `services::authorization`.

use sqlx::PgPool;

use crate::{
    models::role::RoleInfo,
    types::{CardId, UserId},
};

pub async fn user_has_permission(
    pool: &PgPool,
    user_id: UserId,
    permission: &str,
) -> Result<bool, sqlx::Error> {
    let exists: Option<(i32,)> = sqlx::query_as(
        "SELECT 1 FROM permission p \
         JOIN role_permission rp ON p.id = rp.permission_id \
         JOIN role r ON rp.role_id = r.id \
         JOIN \"user\" u ON u.role_id = r.id \
         WHERE u.id = $1 AND p.name = $2 \
         LIMIT 1",
    )
    .bind(user_id)
    .bind(permission)
    .fetch_optional(pool)
    .await?;
    Ok(exists.is_some())
}

pub async fn list_user_permissions(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT p.name FROM permission p \
         JOIN role_permission rp ON p.id = rp.permission_id \
         JOIN role r ON rp.role_id = r.id \
         JOIN \"user\" u ON u.role_id = r.id \
         WHERE u.id = $1 \
         ORDER BY p.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_user_role(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Option<RoleInfo>, sqlx::Error> {
    sqlx::query_as::<_, RoleInfo>(
        "SELECT r.id, r.name, r.description FROM role r \
         JOIN \"user\" u ON u.role_id = r.id \
         WHERE u.id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn card_belongs_to_user(
    pool: &PgPool,
    card_id: CardId,
    user_id: UserId,
) -> Result<bool, sqlx::Error> {
    let exists: Option<(i32,)> =
        sqlx::query_as("SELECT 1 FROM card_data WHERE id = $1 AND user_id = $2")
            .bind(card_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(exists.is_some())
}
