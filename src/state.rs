use std::sync::Arc;

use crate::database::store::RecordStoreClient;
use crate::middleware::session::SessionKeys;
use crate::services::identity::IdentityProvider;
use crate::views::templates::Templates;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordStoreClient,
    pub identity: Arc<dyn IdentityProvider>,
    pub sessions: SessionKeys,
    pub templates: Templates,
}

impl AppState {
    pub fn new(
        records: RecordStoreClient,
        identity: Arc<dyn IdentityProvider>,
        sessions: SessionKeys,
        templates: Templates,
    ) -> Self {
        AppState {
            records,
            identity,
            sessions,
            templates,
        }
    }
}
