// src/services/identity.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::errors::{AppError, Result};

/// A user the identity provider vouched for.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedInUser {
    pub uid: String,
    pub email: String,
    /// Provider-issued session lifetime, when it reports one.
    pub expires_in_secs: Option<i64>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fails with `AppError::IdentityProvider` carrying the provider's code and message.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser>;
}

/// Email/password sign-in against the Identity Toolkit REST API.
#[derive(Clone)]
pub struct RestIdentityProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    expires_in: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestIdentityProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn sign_in_url(&self) -> String {
        format!("{}/accounts:signInWithPassword", self.base_url)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser> {
        let response = self
            .client
            .post(self.sign_in_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!("Identity provider rejected sign-in ({}): {}", status, body);
            return Err(provider_error(&body));
        }

        let body: SignInResponse = response.json().await?;
        Ok(SignedInUser {
            uid: body.local_id,
            email: body.email,
            expires_in_secs: body.expires_in.and_then(|secs| secs.parse().ok()),
        })
    }
}

/// Maps a provider error body to `auth/<kebab-case-reason>: <provider message>`.
fn provider_error(body: &str) -> AppError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let message = envelope.error.message;
            let reason = message.split(" : ").next().unwrap_or(&message).trim();
            let code = format!("auth/{}", reason.to_lowercase().replace('_', "-"));
            AppError::identity(code, message)
        }
        Err(_) => AppError::identity("auth/internal-error", body.to_string()),
    }
}
