use chrono::DateTime;
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::engine::Engine;
use crate::models::match_record::Match;
use crate::views::format_number;
use crate::views::layout::{self, Page};
use crate::views::notification::Notification;

#[derive(Debug, Serialize)]
struct MatchRow<'a> {
    date: String,
    time_control: &'a str,
    engine1: String,
    engine2: String,
    wins: i64,
    draws: i64,
    losses: i64,
    total: i64,
    diff: String,
}

/// Most recent first; matches on the same second keep their resolved order.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Day-precision date such as `Mon Jan 02 2023`, in UTC.
pub fn format_date(seconds: i64) -> String {
    match DateTime::from_timestamp(seconds, 0) {
        Some(date) => date.format("%a %b %d %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

pub fn format_diff(diff: f64) -> String {
    if diff > 0.0 {
        format!("+{}", format_number(diff))
    } else {
        format_number(diff)
    }
}

fn engine_cell(engine: &Engine) -> String {
    format!("{} ({})", engine.name, format_number(engine.rating))
}

pub fn context(mut matches: Vec<Match>, notification: Option<&Notification>) -> Value {
    sort_matches(&mut matches);

    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|record| MatchRow {
            date: format_date(record.date),
            time_control: &record.time_control,
            engine1: engine_cell(&record.engine1),
            engine2: engine_cell(&record.engine2),
            wins: record.wins,
            draws: record.draws,
            losses: record.losses,
            total: record.total,
            diff: format_diff(record.diff),
        })
        .collect();

    layout::context(Page::Matches, notification, json!({ "matches": rows }))
}
