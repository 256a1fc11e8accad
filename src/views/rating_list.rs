use serde::Serialize;
use serde_json::{json, Value};

use crate::middleware::session::SessionContext;
use crate::models::engine::Engine;
use crate::views::format_number;
use crate::views::layout::{self, Page};
use crate::views::notification::Notification;

#[derive(Debug, Serialize)]
struct EngineRow<'a> {
    name: &'a str,
    rating: String,
    stable: &'static str,
    games: i64,
    author: &'a str,
}

/// Highest rating first. The sort is stable, so equal ratings keep fetch order.
pub fn sort_engines(engines: &mut [Engine]) {
    engines.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

pub fn context(
    mut engines: Vec<Engine>,
    session: &SessionContext,
    notification: Option<&Notification>,
) -> Value {
    sort_engines(&mut engines);

    let rows: Vec<EngineRow> = engines
        .iter()
        .map(|engine| EngineRow {
            name: &engine.name,
            rating: format_number(engine.rating),
            stable: if engine.stable { "Yes" } else { "No" },
            games: engine.games,
            author: &engine.author,
        })
        .collect();

    let admin = session.admin().map(|admin| json!({ "email": admin.email }));

    layout::context(
        Page::RatingList,
        notification,
        json!({
            "engines": rows,
            "admin": admin,
        }),
    )
}
