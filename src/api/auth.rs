use super::{
    client::ApiClient,
    error::ApiError,
    types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
};
use crate::utils::storage;

impl ApiClient {
    /// `POST /api/login`. On success the bearer token is persisted before the
    /// response is handed back; a failure leaves storage untouched.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .send_json(|client, base| client.post(format!("{base}/api/login")).json(&request))
            .await?;
        storage::store_token(&response.token).map_err(ApiError::unexpected)?;
        Ok(response)
    }

    /// `POST /api/register`. New accounts are implicitly role `civil`; the
    /// backend returns the token and the created user id.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let response: RegisterResponse = self
            .send_json(|client, base| client.post(format!("{base}/api/register")).json(&request))
            .await?;
        storage::store_token(&response.token).map_err(ApiError::unexpected)?;
        Ok(response)
    }

    /// `GET /api/user`: re-fetches the profile behind the stored token.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.send_json(|client, base| client.get(format!("{base}/api/user")))
            .await
    }
}
