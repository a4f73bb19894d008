//! Authorization repository trait for dependency injection and testing.
//!
//! This module defines the AuthorizationRepository trait which can be mocked
//! using mockall for testing purposes.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    models::role::RoleInfo,
    repositories::permissions,
    types::{CardId, UserId},
};

/// Read-only RBAC lookups.
///
/// Use `MockAuthorizationRepository` in tests to simulate grants or
/// database failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationRepository: Send + Sync {
    /// Whether the user's role grants `permission`.
    async fn user_has_permission(
        &self,
        user_id: UserId,
        permission: &str,
    ) -> Result<bool, sqlx::Error>;

    /// Every permission name granted through the user's role.
    async fn list_user_permissions(&self, user_id: UserId) -> Result<Vec<String>, sqlx::Error>;

    async fn find_user_role(&self, user_id: UserId) -> Result<Option<RoleInfo>, sqlx::Error>;

    /// Whether `card_id` exists and is owned by `user_id`.
    async fn card_belongs_to_user(
        &self,
        card_id: CardId,
        user_id: UserId,
    ) -> Result<bool, sqlx::Error>;
}

/// PostgreSQL-backed implementation.
#[derive(Debug, Clone)]
pub struct PgAuthorizationRepository {
    pool: PgPool,
}

impl PgAuthorizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorizationRepository for PgAuthorizationRepository {
    async fn user_has_permission(
        &self,
        user_id: UserId,
        permission: &str,
    ) -> Result<bool, sqlx::Error> {
        permissions::user_has_permission(&self.pool, user_id, permission).await
    }

    async fn list_user_permissions(&self, user_id: UserId) -> Result<Vec<String>, sqlx::Error> {
        permissions::list_user_permissions(&self.pool, user_id).await
    }

    async fn find_user_role(&self, user_id: UserId) -> Result<Option<RoleInfo>, sqlx::Error> {
        permissions::find_user_role(&self.pool, user_id).await
    }

    async fn card_belongs_to_user(
        &self,
        card_id: CardId,
        user_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        permissions::card_belongs_to_user(&self.pool, card_id, user_id).await
    }
}
