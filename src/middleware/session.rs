use std::convert::Infallible;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::services::identity::SignedInUser;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "acerl_session";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub uid: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    SignedOut,
    SignedIn(AdminUser),
}

/// Signs and verifies the session cookie.
#[derive(Clone)]
pub struct SessionKeys {
    secret: String,
    default_ttl_secs: i64,
    secure: bool,
}

impl SessionKeys {
    pub fn new(secret: String, default_ttl_secs: i64, secure: bool) -> Self {
        Self {
            secret,
            default_ttl_secs,
            secure,
        }
    }

    /// Whether cookies are marked `Secure`.
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Session cookie for a freshly signed-in user.
    pub fn issue(&self, user: &SignedInUser) -> Result<Cookie<'static>> {
        let ttl = user.expires_in_secs.unwrap_or(self.default_ttl_secs);
        let claims = Claims {
            sub: user.uid.clone(),
            email: user.email.clone(),
            exp: (Utc::now().timestamp() + ttl) as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )?;

        Ok(Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build())
    }

    /// Cookie that, once removed from the jar, ends the session.
    pub fn cleared(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE).path("/").build()
    }

    pub fn verify(&self, token: &str) -> Option<AdminUser> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| tracing::debug!("Discarding session token: {}", e))
        .ok()?;

        Some(AdminUser {
            uid: token_data.claims.sub,
            email: token_data.claims.email,
        })
    }
}

/// Per-request view of who is signed in, handed to the page renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    state: AuthState,
}

impl SessionContext {
    pub fn signed_out() -> Self {
        Self {
            state: AuthState::SignedOut,
        }
    }

    pub fn signed_in(admin: AdminUser) -> Self {
        Self {
            state: AuthState::SignedIn(admin),
        }
    }

    pub fn from_jar(jar: &CookieJar, keys: &SessionKeys) -> Self {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| keys.verify(cookie.value()))
            .map(Self::signed_in)
            .unwrap_or_else(Self::signed_out)
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn admin(&self) -> Option<&AdminUser> {
        match self.state() {
            AuthState::SignedIn(admin) => Some(admin),
            AuthState::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.admin().is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(SessionContext::from_jar(&jar, &state.sessions))
    }
}
