use axum::{routing::get, Router};

use crate::handlers::{matches, rating_list};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(rating_list::rating_list_page))
        .route("/matches", get(matches::matches_page))
}
