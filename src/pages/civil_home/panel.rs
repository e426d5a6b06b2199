use crate::api::Violation;
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::Layout, layout::LoadingSpinner,
};
use crate::pages::civil_home::{
    utils::{apply_filter, summarize, ViolationFilter},
    view_model::{use_civil_home_view_model, CivilHomeViewModel},
};
use crate::state::auth::use_auth;
use crate::utils::format::{format_fine, format_timestamp};
use leptos::*;

#[component]
pub fn CivilHomePanel() -> impl IntoView {
    let vm = use_civil_home_view_model();

    view! {
        <Layout>
            <div class="space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"My violations"</h2>
                <ProfileCard />
                <SummarySection vm=vm />
                <FilterBar vm=vm />
                <InlineErrorMessage error=Signal::derive(move || vm.pay_message.get()) />
                <ViolationList vm=vm />
            </div>
        </Layout>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let (auth, _) = use_auth();
    view! {
        {move || auth.get().user.map(|user| view! {
            <div class="bg-surface-elevated rounded-lg shadow p-4">
                <p class="font-semibold text-fg">{user.name.clone()}</p>
                <p class="text-sm text-fg-muted">
                    {format!(
                        "{} | {}",
                        user.license_plate.clone().unwrap_or_else(|| "No plate on file".into()),
                        user.vehicle_type.clone().unwrap_or_else(|| "Unknown vehicle".into())
                    )}
                </p>
            </div>
        })}
    }
}

#[component]
fn SummarySection(vm: CivilHomeViewModel) -> impl IntoView {
    view! {
        {move || match vm.violations_resource.get() {
            Some(Ok(violations)) => {
                let summary = summarize(&violations);
                view! {
                    <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                        <SummaryCard label="Total" value=summary.total.to_string() />
                        <SummaryCard label="Paid" value=summary.paid.to_string() />
                        <SummaryCard label="Unpaid" value=summary.unpaid.to_string() />
                        <SummaryCard
                            label="Outstanding (DZD)"
                            value=format_fine(summary.outstanding_amount)
                        />
                    </div>
                }.into_view()
            }
            _ => ().into_view(),
        }}
    }
}

#[component]
fn SummaryCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-4">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="text-2xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[component]
fn FilterBar(vm: CivilHomeViewModel) -> impl IntoView {
    let filters = [
        ViolationFilter::All,
        ViolationFilter::Unpaid,
        ViolationFilter::Paid,
    ];
    view! {
        <div class="flex gap-2">
            {filters.into_iter().map(|filter| {
                let active = move || vm.filter.get() == filter;
                view! {
                    <button
                        class=move || format!(
                            "px-3 py-1.5 rounded-md text-sm font-medium {}",
                            if active() {
                                "bg-action-primary-bg text-action-primary-text"
                            } else {
                                "bg-surface-muted text-fg-muted hover:text-fg"
                            }
                        )
                        on:click=move |_| vm.filter.set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn ViolationList(vm: CivilHomeViewModel) -> impl IntoView {
    view! {
        {move || match vm.violations_resource.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! {
                <div class="space-y-3">
                    <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                    <button
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                        on:click=move |_| vm.refetch()
                    >
                        "Try again"
                    </button>
                </div>
            }.into_view(),
            Some(Ok(violations)) => {
                let visible = apply_filter(&violations, vm.filter.get());
                if visible.is_empty() {
                    view! {
                        <EmptyState
                            title="No violations"
                            description="Nothing matches the current filter."
                        />
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-3">
                            {visible.into_iter().map(|violation| view! {
                                <ViolationRow violation=violation vm=vm />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}

#[component]
fn ViolationRow(violation: Violation, vm: CivilHomeViewModel) -> impl IntoView {
    let paying = vm.pay_action.pending();
    let violation_id = violation.id.clone();

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
                <p class="text-sm font-medium text-fg">
                    {format!("{} DZD", format_fine(violation.fine_amount))}
                </p>
            </div>
            {if violation.paid {
                view! {
                    <span class="px-3 py-1 rounded-full text-sm bg-status-success-bg text-status-success-text">
                        "Paid"
                    </span>
                }.into_view()
            } else {
                view! {
                    <button
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                        disabled=paying
                        on:click=move |_| vm.handle_pay(violation_id.clone())
                    >
                        {move || if paying.get() { "Processing..." } else { "Pay fine" }}
                    </button>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::SessionStatus;
    use crate::test_support::helpers::{civil_user, provide_auth_state};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn civil_home_renders_heading_and_filters() {
        let html = render_to_string(move || {
            provide_auth_state(Some(civil_user()), SessionStatus::Authenticated);
            view! { <CivilHomePanel /> }
        });
        assert!(html.contains("My violations"));
        assert!(html.contains("Unpaid"));
        assert!(html.contains("Paid"));
    }
}
