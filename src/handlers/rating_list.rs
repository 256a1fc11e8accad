use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::errors::Result;
use crate::middleware::{flash, session::SessionContext};
use crate::state::AppState;
use crate::views::notification::Notification;

pub async fn rating_list_page(
    State(state): State<AppState>,
    session: SessionContext,
    jar: CookieJar,
) -> (CookieJar, Response) {
    // The jar carries the flash removal even when the page fails.
    let (jar, notification) = flash::take(jar);
    let page = render_page(&state, &session, notification.as_ref()).await;
    (jar, state.templates.respond(page, notification.as_ref()))
}

async fn render_page(
    state: &AppState,
    session: &SessionContext,
    notification: Option<&Notification>,
) -> Result<String> {
    let engines = state.records.fetch_engines().await?;
    tracing::info!(
        "📋 Rendering rating list: {} engines (signed in: {})",
        engines.len(),
        session.is_signed_in()
    );
    state.templates.rating_list(engines, session, notification)
}
