use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::errors::Result;
use crate::middleware::session::SessionContext;
use crate::models::engine::Engine;
use crate::models::match_record::Match;
use crate::views::layout::{self, Page};
use crate::views::notification::Notification;
use crate::views::{matches, rating_list};

const PARTIALS: [(&str, &str); 3] = [
    ("layout_head", include_str!("../../templates/layout_head.hbs")),
    ("layout_foot", include_str!("../../templates/layout_foot.hbs")),
    ("notification", include_str!("../../templates/notification.hbs")),
];

const PAGES: [(&str, &str); 3] = [
    ("rating_list", include_str!("../../templates/rating_list.hbs")),
    ("matches", include_str!("../../templates/matches.hbs")),
    ("error", include_str!("../../templates/error.hbs")),
];

/// Handlebars registry shared by every handler.
#[derive(Clone)]
pub struct Templates {
    registry: Arc<Handlebars<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        for (name, source) in PARTIALS {
            hb.register_partial(name, source)?;
        }
        for (name, source) in PAGES {
            hb.register_template_string(name, source)?;
        }
        Ok(Self {
            registry: Arc::new(hb),
        })
    }

    pub fn render(&self, name: &str, context: &Value) -> Result<String> {
        Ok(self.registry.render(name, context)?)
    }

    pub fn rating_list(
        &self,
        engines: Vec<Engine>,
        session: &SessionContext,
        notification: Option<&Notification>,
    ) -> Result<String> {
        self.render("rating_list", &rating_list::context(engines, session, notification))
    }

    pub fn matches(&self, matches: Vec<Match>, notification: Option<&Notification>) -> Result<String> {
        self.render("matches", &matches::context(matches, notification))
    }

    /// Turns a rendered page, or the error that prevented it, into a response.
    pub fn respond(&self, page: Result<String>, notification: Option<&Notification>) -> Response {
        let err = match page {
            Ok(html) => return Html(html).into_response(),
            Err(err) => err,
        };

        let (status, title) = err.status();
        tracing::error!("❌ {} ({}): {}", title, status, err);

        let context = layout::context(
            Page::Error,
            notification,
            json!({ "error": { "title": title, "detail": err.to_string() } }),
        );
        match self.render("error", &context) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(render_err) => {
                tracing::error!("❌ Error page failed to render: {}", render_err);
                err.into_response()
            }
        }
    }
}
