use super::{
    client::ApiClient,
    error::ApiError,
    types::{NewViolation, Violation},
};

impl ApiClient {
    /// `GET /api/violations`. The backend scopes the list to the caller:
    /// civil users see their own plates, officers see what they recorded.
    pub async fn list_violations(&self) -> Result<Vec<Violation>, ApiError> {
        self.send_json(|client, base| client.get(format!("{base}/api/violations")))
            .await
    }

    /// `PUT /api/violations/{id}/pay`. Returns the updated record, which is
    /// authoritative; callers must not flip `paid` locally ahead of it.
    pub async fn pay_violation(&self, id: &str) -> Result<Violation, ApiError> {
        self.send_json(|client, base| client.put(format!("{base}/api/violations/{id}/pay")))
            .await
    }

    /// `POST /api/violations` (police only).
    pub async fn create_violation(&self, payload: &NewViolation) -> Result<Violation, ApiError> {
        self.send_json(|client, base| client.post(format!("{base}/api/violations")).json(payload))
            .await
    }
}
