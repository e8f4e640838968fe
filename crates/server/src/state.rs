use std::sync::Arc;

use configs::AuthConfig;
use service::store::StoreService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub stores: Arc<StoreService>,
    pub auth: Arc<AuthConfig>,
}

impl ServerState {
    pub fn new(stores: Arc<StoreService>, auth: AuthConfig) -> Self {
        Self { stores, auth: Arc::new(auth) }
    }
}
