use serde_json::{json, Value};

use crate::views::notification::Notification;

const SITE_TITLE: &str = "Amateur Chess Engine Rating List";

/// Which page the shell is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    RatingList,
    Matches,
    Error,
}

impl Page {
    fn title(self) -> String {
        match self {
            Page::RatingList => SITE_TITLE.to_string(),
            Page::Matches => format!("{} - Matches", SITE_TITLE),
            Page::Error => format!("{} - Error", SITE_TITLE),
        }
    }

    fn description(self) -> &'static str {
        match self {
            Page::RatingList | Page::Error => "Rating List for growing, amateur chess engines",
            Page::Matches => "Matches for growing, amateur chess engines",
        }
    }

    fn header(self) -> String {
        match self {
            Page::RatingList | Page::Error => SITE_TITLE.to_string(),
            Page::Matches => format!("{} Matches", SITE_TITLE),
        }
    }
}

/// Template context for the shared shell, extended with the page's own fields.
pub fn context(page: Page, notification: Option<&Notification>, content: Value) -> Value {
    let mut context = json!({
        "title": page.title(),
        "description": page.description(),
        "header": page.header(),
        "notification": notification,
    });
    if let (Value::Object(shell), Value::Object(fields)) = (&mut context, content) {
        shell.extend(fields);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::notification::NotificationColor;

    #[test]
    fn page_fields_extend_the_shell() {
        let context = context(Page::Matches, None, json!({ "matches": [] }));
        assert_eq!(context["title"], "Amateur Chess Engine Rating List - Matches");
        assert_eq!(context["header"], "Amateur Chess Engine Rating List Matches");
        assert!(context["notification"].is_null());
        assert!(context["matches"].is_array());
    }

    #[test]
    fn notification_is_carried_with_its_color() {
        let notice = Notification::new(NotificationColor::Yellow, "Success", "Logged Out");
        let context = context(Page::RatingList, Some(&notice), json!({}));
        assert_eq!(context["notification"]["color"], "yellow");
        assert_eq!(context["notification"]["message"], "Logged Out");
    }
}
