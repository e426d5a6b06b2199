use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::{self, ApiError};
use crate::{config, utils, utils::storage};

/// Thin handle over the shared HTTP client. Cloning is cheap; one instance
/// is provided via context at the app root so tests can swap the base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Runs one request through the pipeline: the bearer token (if any) is
    /// attached, the response is decoded, and failures are normalized into
    /// [`ApiError`]. A 401 additionally tears the session down before the
    /// error is surfaced; nothing is retried.
    pub(crate) async fn send_json<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: FnOnce(&Client, &str) -> RequestBuilder,
    {
        let base_url = self.resolved_base_url().await;
        let mut request = build(&self.client, &base_url);
        if let Some(token) = storage::stored_token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            Self::tear_down_session();
        }

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unexpected(format!("Failed to parse response: {e}")))
        } else {
            let raw: Value = response.json().await.unwrap_or(Value::Null);
            Err(error::from_status_payload(status.as_u16(), raw))
        }
    }

    /// Session teardown on an authorization failure: the durable token is
    /// dropped so the next guard evaluation lands on the login view.
    fn tear_down_session() {
        log::warn!("Received 401, clearing stored session");
        storage::clear_token();
        Self::redirect_to_login_if_needed();
    }

    fn redirect_to_login_if_needed() {
        if let Some(pathname) = utils::current_pathname() {
            if pathname == "/login" {
                return;
            }
        }
        utils::redirect("/login");
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
