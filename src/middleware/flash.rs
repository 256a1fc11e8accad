use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::views::notification::Notification;

pub const FLASH_COOKIE: &str = "acerl_flash";

/// Stores a notification to be shown on the next page render.
pub fn put(jar: CookieJar, notification: &Notification, secure: bool) -> CookieJar {
    let payload = match serde_json::to_vec(notification) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Dropping notification that failed to serialize: {}", e);
            return jar;
        }
    };

    jar.add(
        Cookie::build((FLASH_COOKIE, URL_SAFE_NO_PAD.encode(payload)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(secure),
    )
}

/// Reads the pending notification, if any, and clears it from the jar.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notification>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|cookie| cookie.value().to_owned()) else {
        return (jar, None);
    };

    let notification = URL_SAFE_NO_PAD
        .decode(raw.as_bytes())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok());
    if notification.is_none() {
        tracing::debug!("Ignoring malformed flash cookie");
    }

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, notification)
}
