//! Fail-closed RBAC checks.
//!
//! Every lookup failure is logged and resolved to the conservative answer:
//! no permission, no role, not the owner. Nothing here returns an error.

use crate::{
    models::{auth::AuthContext, permission::VIEW_ANY_USER_CARDS, role::RoleInfo},
    repositories::AuthorizationRepository,
    types::{CardId, UserId},
};

/// Returns `true` iff the user's role grants `permission_name`.
///
/// An absent user id is answered without touching the database.
pub async fn check_permission(
    permission_name: &str,
    repo: &dyn AuthorizationRepository,
    user_id: Option<UserId>,
) -> bool {
    let Some(user_id) = user_id else {
        tracing::warn!(
            permission = permission_name,
            "No user_id provided to check_permission"
        );
        return false;
    };

    match repo.user_has_permission(user_id, permission_name).await {
        Ok(true) => {
            tracing::info!(%user_id, permission = permission_name, "User has permission");
            true
        }
        Ok(false) => {
            tracing::warn!(
                %user_id,
                permission = permission_name,
                "User does NOT have permission"
            );
            false
        }
        Err(err) => {
            tracing::error!(
                %user_id,
                permission = permission_name,
                error = %err,
                "Error checking permission"
            );
            false
        }
    }
}

/// Permission names reachable through the user's role; empty on error.
pub async fn get_user_permissions(repo: &dyn AuthorizationRepository, user_id: UserId) -> Vec<String> {
    match repo.list_user_permissions(user_id).await {
        Ok(permissions) => {
            tracing::info!(%user_id, ?permissions, "Fetched user permissions");
            permissions
        }
        Err(err) => {
            tracing::error!(%user_id, error = %err, "Error fetching permissions");
            Vec::new()
        }
    }
}

pub async fn get_user_role(
    repo: &dyn AuthorizationRepository,
    user_id: UserId,
) -> Option<RoleInfo> {
    match repo.find_user_role(user_id).await {
        Ok(Some(role)) => {
            tracing::info!(%user_id, role = %role.name, "Fetched user role");
            Some(role)
        }
        Ok(None) => {
            tracing::warn!(%user_id, "No role found for user");
            None
        }
        Err(err) => {
            tracing::error!(%user_id, error = %err, "Error fetching role");
            None
        }
    }
}

pub async fn is_card_owner(
    repo: &dyn AuthorizationRepository,
    card_id: CardId,
    user_id: UserId,
) -> bool {
    match repo.card_belongs_to_user(card_id, user_id).await {
        Ok(true) => {
            tracing::info!(%user_id, %card_id, "User is owner of card");
            true
        }
        Ok(false) => {
            tracing::info!(%user_id, %card_id, "User is NOT owner of card");
            false
        }
        Err(err) => {
            tracing::error!(
                %user_id,
                %card_id,
                error = %err,
                "Error checking card ownership"
            );
            false
        }
    }
}

/// Grants access to a card when the caller owns it, is an admin, or holds
/// `view_any_user_cards`, checked in that order.
pub async fn can_access_card(
    repo: &dyn AuthorizationRepository,
    card_id: CardId,
    auth: &AuthContext,
) -> bool {
    let user_id = auth.user_id();

    if let Some(user_id) = user_id {
        if is_card_owner(repo, card_id, user_id).await {
            return true;
        }
    }

    if auth.is_admin() {
        tracing::info!(user_id = ?user_id, %card_id, "Admin granted card access");
        return true;
    }

    check_permission(VIEW_ANY_USER_CARDS, repo, user_id).await
}

/// Access rule for acting on cards that belong to `owner_id`: the owner
/// always may, otherwise the caller must be an admin or hold `permission_name`.
pub async fn can_act_for_owner(
    repo: &dyn AuthorizationRepository,
    auth: &AuthContext,
    owner_id: UserId,
    permission_name: &str,
) -> bool {
    if auth.user_id() == Some(owner_id) || auth.is_admin() {
        return true;
    }
    check_permission(permission_name, repo, auth.user_id()).await
}
