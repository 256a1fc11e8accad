use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::database::memory::MemoryStore;
use crate::database::store::RecordStoreClient;
use crate::errors::{AppError, Result};
use crate::middleware::session::SessionKeys;
use crate::services::identity::{IdentityProvider, SignedInUser};
use crate::state::AppState;
use crate::views::templates::Templates;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "hunter22";
pub const ADMIN_UID: &str = "admin-uid";

/// Identity provider with a fixed set of accounts that counts its calls.
#[derive(Default)]
pub struct StaticIdentity {
    accounts: HashMap<String, (String, String)>,
    calls: AtomicUsize,
}

impl StaticIdentity {
    pub fn with_admin() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            ADMIN_EMAIL.to_string(),
            (ADMIN_PASSWORD.to_string(), ADMIN_UID.to_string()),
        );
        Self {
            accounts,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.accounts.get(email) {
            Some((expected, uid)) if expected == password => Ok(SignedInUser {
                uid: uid.clone(),
                email: email.to_string(),
                expires_in_secs: Some(3600),
            }),
            Some(_) => Err(AppError::identity("auth/invalid-password", "INVALID_PASSWORD")),
            None => Err(AppError::identity("auth/email-not-found", "EMAIL_NOT_FOUND")),
        }
    }
}

pub fn session_keys() -> SessionKeys {
    SessionKeys::new("test-session-secret".to_string(), 3600, false)
}

pub fn app_state(store: Arc<MemoryStore>, identity: Arc<StaticIdentity>) -> AppState {
    AppState::new(
        RecordStoreClient::new(store),
        identity,
        session_keys(),
        Templates::new().unwrap(),
    )
}
