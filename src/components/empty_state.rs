use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {move || description.clone().map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No violations"
                    description="Your record is clean."
                />
            }
        });
        assert!(html.contains("No violations"));
        assert!(html.contains("Your record is clean."));
    }
}
