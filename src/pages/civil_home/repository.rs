use crate::api::{ApiClient, ApiError, Violation};

pub async fn fetch_violations(api: &ApiClient) -> Result<Vec<Violation>, ApiError> {
    api.list_violations().await
}

/// Marks a violation as paid. The record in the response is what the
/// backend actually persisted; callers must rely on it (or refetch) rather
/// than flipping the row locally.
pub async fn pay_violation(api: &ApiClient, violation_id: &str) -> Result<Violation, ApiError> {
    api.pay_violation(violation_id).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn pay_result_reflects_backend_state_not_the_request() {
        storage::store_token("tok123").unwrap();
        let server = MockServer::start_async().await;
        // Backend refuses to flip the record, e.g. payment gateway declined.
        server.mock(|when, then| {
            when.method(PUT).path("/api/violations/v1/pay");
            then.status(200).json_body(json!({
                "id": "v1",
                "license_plate": "01234-116-16",
                "violation_type": "speeding",
                "location": "RN5, Alger",
                "violation_date": "2025-03-14T09:30",
                "fine_amount": 5000.0,
                "paid": false
            }));
        });

        let api = ApiClient::new_with_base_url(server.base_url());
        let record = pay_violation(&api, "v1").await.unwrap();
        assert!(!record.paid);
        storage::clear_token();
    }
}
