//! IdentityClient - HTTP client for the hosted identity provider
//!
//! Wraps the provider's `/auth/v1` REST surface. Every call carries the
//! project API key; user-scoped calls additionally carry the caller's own
//! access token as the bearer credential.

use std::time::Duration;

use reqwest::Client;
use uuid::Uuid;

use crate::provider::error::ProviderError;
use crate::provider::types::{ProviderSession, SignUpResponse};

/// Provider request timeout
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    /// Turn a non-success response into a classified [`ProviderError`]
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ProviderError::classify(status, &body))
    }

    /// Create an account
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignUpResponse, ProviderError> {
        let response = self
            .http
            .post(self.endpoint("/signup"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Password grant: exchange credentials for a session
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let response = self
            .http
            .post(self.endpoint("/token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Send a password recovery email, linking back to the frontend
    pub async fn send_recovery_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(self.endpoint("/recover"))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Change the password of the account behind `access_token`
    pub async fn update_password(
        &self,
        access_token: &str,
        password: &str,
    ) -> Result<(), ProviderError> {
        let response = self
            .http
            .put(self.endpoint("/user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Revoke the session behind `access_token`
    pub async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(self.endpoint("/logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Delete an account (admin surface; used to roll back a failed registration)
    pub async fn admin_delete_user(&self, user_id: Uuid) -> Result<(), ProviderError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/admin/users/{}", user_id)))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}
