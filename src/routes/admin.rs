use axum::{routing::post, Router};

use crate::handlers::admin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/engines", post(admin::create_engine))
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
}
