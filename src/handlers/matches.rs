use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::errors::Result;
use crate::middleware::flash;
use crate::state::AppState;
use crate::views::notification::Notification;

pub async fn matches_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Response) {
    let (jar, notification) = flash::take(jar);
    let page = render_page(&state, notification.as_ref()).await;
    (jar, state.templates.respond(page, notification.as_ref()))
}

async fn render_page(state: &AppState, notification: Option<&Notification>) -> Result<String> {
    let start_time = std::time::Instant::now();
    let matches = state.records.fetch_matches().await?;
    tracing::info!(
        "♟️ Resolved {} matches in {:?}",
        matches.len(),
        start_time.elapsed()
    );
    state.templates.matches(matches, notification)
}
