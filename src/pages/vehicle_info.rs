use crate::api::{ApiClient, ApiError, Violation};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, forms::TextField, layout::Layout,
    layout::LoadingSpinner,
};
use crate::utils::format::{format_fine, format_timestamp};
use leptos::{ev::SubmitEvent, *};

/// Plates are compared ignoring case, spaces and dashes so "01234 116 16"
/// finds "01234-116-16".
pub fn normalize_plate(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn plate_matches(violation: &Violation, query: &str) -> bool {
    let query = normalize_plate(query);
    !query.is_empty() && normalize_plate(&violation.license_plate) == query
}

/// `None` means no search was performed; an empty query resolves locally
/// without touching the backend.
async fn lookup_plate(
    api: &ApiClient,
    plate: &str,
) -> Result<Option<Vec<Violation>>, ApiError> {
    if plate.trim().is_empty() {
        return Ok(None);
    }
    let violations = api.list_violations().await?;
    Ok(Some(
        violations
            .into_iter()
            .filter(|v| plate_matches(v, plate))
            .collect(),
    ))
}

#[component]
pub fn VehicleInfoPage() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (submitted_query, set_submitted_query) = create_signal(String::new());

    let api = use_context::<ApiClient>().unwrap_or_default();
    let violations_resource = create_resource(
        move || submitted_query.get(),
        move |plate| {
            let api = api.clone();
            async move { lookup_plate(&api, &plate).await }
        },
    );

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_submitted_query.set(query.get_untracked());
    };

    view! {
        <Layout>
            <div class="max-w-2xl mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Vehicle lookup"</h2>
                <form class="flex items-end gap-3" on:submit=handle_submit>
                    <TextField
                        id="plate_query"
                        label="License plate"
                        placeholder="e.g. 01234-116-16"
                        value=query
                        on_input=Callback::new(move |value| set_query.set(value))
                    />
                    <button
                        type="submit"
                        class="px-4 py-2.5 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                    >
                        "Search"
                    </button>
                </form>
                {move || match violations_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                    }.into_view(),
                    Some(Ok(None)) => ().into_view(),
                    Some(Ok(Some(matches))) => {
                        if matches.is_empty() {
                            view! {
                                <EmptyState
                                    title="No record"
                                    description="No violations are registered for this plate."
                                />
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-3">
                                    {matches.into_iter().map(|violation| {
                                        let paid = violation.paid;
                                        view! {
                                        <div class="bg-surface-elevated rounded-lg shadow p-4 flex items-center justify-between">
                                            <div>
                                                <p class="font-semibold text-fg">{violation.violation_type.clone()}</p>
                                                <p class="text-sm text-fg-muted">
                                                    {format!(
                                                        "{} | {}",
                                                        violation.location,
                                                        format_timestamp(&violation.violation_date)
                                                    )}
                                                </p>
                                            </div>
                                            <div class="text-right">
                                                <p class="text-sm font-medium text-fg">
                                                    {format!("{} DZD", format_fine(violation.fine_amount))}
                                                </p>
                                                <p class=move || format!(
                                                    "text-sm {}",
                                                    if paid {
                                                        "text-status-success-text"
                                                    } else {
                                                        "text-status-error-text"
                                                    }
                                                )>
                                                    {if paid { "Paid" } else { "Unpaid" }}
                                                </p>
                                            </div>
                                        </div>
                                    }}).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(plate: &str) -> Violation {
        Violation {
            id: "v1".into(),
            license_plate: plate.into(),
            violation_type: "speeding".into(),
            location: "RN5, Alger".into(),
            violation_date: "2025-03-14T09:30".into(),
            fine_amount: 5000.0,
            paid: false,
            payment_date: None,
            insurance_policy: None,
            notes: None,
            officer_id: None,
        }
    }

    #[test]
    fn normalization_strips_separators_and_case() {
        assert_eq!(normalize_plate("01234 116 16"), "0123411616");
        assert_eq!(normalize_plate("ab-12-cd"), "AB12CD");
    }

    #[test]
    fn matching_ignores_separators() {
        let v = violation("01234-116-16");
        assert!(plate_matches(&v, "01234 116 16"));
        assert!(plate_matches(&v, "0123411616"));
        assert!(!plate_matches(&v, "99999-116-16"));
    }

    #[test]
    fn empty_query_never_matches() {
        let v = violation("01234-116-16");
        assert!(!plate_matches(&v, ""));
        assert!(!plate_matches(&v, " - "));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn violation_json(id: &str, plate: &str) -> serde_json::Value {
        json!({
            "id": id,
            "license_plate": plate,
            "violation_type": "speeding",
            "location": "RN5, Alger",
            "violation_date": "2025-03-14T09:30",
            "fine_amount": 5000.0,
            "paid": false
        })
    }

    #[tokio::test]
    async fn empty_query_resolves_without_a_request() {
        let server = MockServer::start_async().await;
        let list_mock = server.mock(|when, then| {
            when.method(GET).path("/api/violations");
            then.status(200).json_body(json!([]));
        });
        let api = ApiClient::new_with_base_url(server.base_url());

        let result = lookup_plate(&api, "   ").await.unwrap();
        assert!(result.is_none());
        assert_eq!(list_mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn lookup_keeps_only_the_requested_plate() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/violations");
            then.status(200).json_body(json!([
                violation_json("v1", "01234-116-16"),
                violation_json("v2", "99999-101-31"),
            ]));
        });
        let api = ApiClient::new_with_base_url(server.base_url());

        let matches = lookup_plate(&api, "01234 116 16").await.unwrap().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "v1");
    }
}
