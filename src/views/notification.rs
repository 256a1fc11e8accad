use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationColor {
    Blue,
    Green,
    Yellow,
    Red,
}

/// Transient message shown once at the top of the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub color: NotificationColor,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(color: NotificationColor, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            color,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(NotificationColor::Red, "Failure", message)
    }
}
