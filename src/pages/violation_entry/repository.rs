use crate::api::{ApiClient, ApiError, NewViolation, Violation};

pub async fn submit_violation(
    api: &ApiClient,
    violation: &NewViolation,
) -> Result<Violation, ApiError> {
    api.create_violation(violation).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::violation_entry::utils::ViolationEntryForm;
    use crate::utils::storage;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn submission_returns_the_persisted_record() {
        storage::store_token("tok123").unwrap();
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/violations")
                .json_body_partial(r#"{ "violation_type": "red_light", "officer_id": "u1" }"#);
            then.status(201).json_body(json!({
                "id": "v9",
                "license_plate": "01234-116-16",
                "violation_type": "red_light",
                "location": "Rue Didouche Mourad",
                "violation_date": "2025-03-14T09:30",
                "fine_amount": 7500.0,
                "paid": false
            }));
        });

        let form = ViolationEntryForm {
            license_plate: "01234-116-16".into(),
            violation_type: "red_light".into(),
            location: "Rue Didouche Mourad".into(),
            violation_date: "2025-03-14T09:30".into(),
            fine_amount: 7500.0,
            insurance_policy: "INS-88".into(),
            notes: String::new(),
        };

        let api = ApiClient::new_with_base_url(server.base_url());
        let record = submit_violation(&api, &form.build_payload("u1"))
            .await
            .unwrap();

        assert_eq!(record.id, "v9");
        assert!(!record.paid);
        mock.assert_async().await;
        storage::clear_token();
    }
}
