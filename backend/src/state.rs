use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    repositories::{AuthorizationRepository, PgAuthorizationRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub authz: Arc<dyn AuthorizationRepository>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        let authz = Arc::new(PgAuthorizationRepository::new(pool.clone()));
        Self {
            pool,
            config,
            authz,
        }
    }

    /// Replaces the RBAC lookups, keeping the pool for the card queries.
    pub fn with_authorization_repository(
        mut self,
        authz: Arc<dyn AuthorizationRepository>,
    ) -> Self {
        self.authz = authz;
        self
    }

    pub fn authz(&self) -> &dyn AuthorizationRepository {
        self.authz.as_ref()
    }
}
