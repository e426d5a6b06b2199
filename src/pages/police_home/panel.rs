use crate::api::{ApiClient, ApiError, Violation};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::Layout, layout::LoadingSpinner,
};
use crate::pages::police_home::repository::{self, build_stats, recent_entries};
use crate::utils::format::{format_fine, format_timestamp};
use leptos::*;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn PoliceHomePanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let violations_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_violations(&api).await }
        },
    );

    view! {
        <Layout>
            <div class="space-y-6 px-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Patrol dashboard"</h2>
                    <a
                        href="/police/violation-entry"
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                    >
                        "Record violation"
                    </a>
                </div>
                {move || match violations_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                    }.into_view(),
                    Some(Ok(violations)) => view! {
                        <StatsSection violations=violations.clone() />
                        <RecentSection violations=violations />
                    }.into_view(),
                }}
            </div>
        </Layout>
    }
}

#[component]
fn StatsSection(violations: Vec<Violation>) -> impl IntoView {
    let stats = build_stats(&violations);
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <StatCard label="Recorded" value=stats.recorded.to_string() />
            <StatCard label="Unpaid" value=stats.unpaid.to_string() />
            <StatCard label="Collected (DZD)" value=format_fine(stats.collected_amount) />
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-4">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="text-2xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[component]
fn RecentSection(violations: Vec<Violation>) -> impl IntoView {
    let recent = recent_entries(&violations, RECENT_LIMIT);
    view! {
        <div class="space-y-3">
            <h3 class="text-lg font-semibold text-fg">"Recent entries"</h3>
            {if recent.is_empty() {
                view! {
                    <EmptyState
                        title="No entries yet"
                        description="Violations you record will show up here."
                    />
                }.into_view()
            } else {
                view! {
                    <div class="space-y-3">
                        {recent.into_iter().map(|violation| view! {
                            <div class="bg-surface-elevated rounded-lg shadow p-4 flex items-center justify-between">
                                <div>
                                    <p class="font-semibold text-fg">{violation.license_plate.clone()}</p>
                                    <p class="text-sm text-fg-muted">
                                        {format!(
                                            "{} | {} | {}",
                                            violation.violation_type,
                                            violation.location,
                                            format_timestamp(&violation.violation_date)
                                        )}
                                    </p>
                                </div>
                                <p class="text-sm font-medium text-fg">
                                    {format!("{} DZD", format_fine(violation.fine_amount))}
                                </p>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::SessionStatus;
    use crate::test_support::helpers::{police_user, provide_auth_state};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn police_home_renders_heading_and_entry_link() {
        let html = render_to_string(move || {
            provide_auth_state(Some(police_user()), SessionStatus::Authenticated);
            view! { <PoliceHomePanel /> }
        });
        assert!(html.contains("Patrol dashboard"));
        assert!(html.contains("/police/violation-entry"));
    }
}
