use crate::api::ApiError;
use leptos::*;

/// Renders an [`ApiError`] inline under the form that produced it. Field
/// errors from validation failures are listed alphabetically so repeated
/// renders of the same error are stable.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.message()).unwrap_or_default()}
                </div>
                {move || error.get().and_then(|e| e.field_errors().cloned()).map(|fields| {
                    let mut entries: Vec<(String, String)> = fields.into_iter().collect();
                    entries.sort();
                    view! {
                        <ul class="list-disc list-inside text-sm">
                            {entries.into_iter().map(|(field, message)| {
                                view! { <li>{format!("{field}: {message}")}</li> }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn inline_error_renders_validation_fields() {
        let html = render_to_string(move || {
            let error = ApiError::Validation {
                status: 422,
                message: "Validation failed".into(),
                fields: HashMap::from([
                    ("email".to_string(), "Email already taken".to_string()),
                    ("phone".to_string(), "Phone must be 9 digits".to_string()),
                ]),
                raw: json!({}),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("email: Email already taken"));
        assert!(html.contains("phone: Phone must be 9 digits"));
    }

    #[test]
    fn inline_error_renders_plain_message_without_fields() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::network("connection refused")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("connection refused"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn inline_error_renders_nothing_when_clear() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Option::<ApiError>::None);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("font-bold"));
    }
}
