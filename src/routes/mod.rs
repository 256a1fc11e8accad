use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod admin;
pub mod pages;

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(admin::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
