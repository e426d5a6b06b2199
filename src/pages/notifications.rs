use crate::api::{ApiClient, Violation};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::Layout, layout::LoadingSpinner,
};
use crate::utils::format::{format_fine, format_timestamp};
use leptos::*;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// One notification per unpaid violation. Read/dismissed flags live only in
/// the page; closing the tab resets them.
pub fn build_notifications(violations: &[Violation]) -> Vec<Notification> {
    violations
        .iter()
        .filter(|v| !v.paid)
        .map(|v| Notification {
            id: v.id.clone(),
            title: format!("Unpaid fine: {} DZD", format_fine(v.fine_amount)),
            body: format!(
                "{} at {} on {}",
                v.violation_type,
                v.location,
                format_timestamp(&v.violation_date)
            ),
        })
        .collect()
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let violations_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_violations().await }
        },
    );

    let read = create_rw_signal(HashSet::<String>::new());
    let dismissed = create_rw_signal(HashSet::<String>::new());

    view! {
        <Layout>
            <div class="max-w-2xl mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Notifications"</h2>
                {move || match violations_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                    }.into_view(),
                    Some(Ok(violations)) => {
                        let notifications: Vec<Notification> = build_notifications(&violations)
                            .into_iter()
                            .filter(|n| !dismissed.get().contains(&n.id))
                            .collect();
                        if notifications.is_empty() {
                            view! {
                                <EmptyState
                                    title="All caught up"
                                    description="No unpaid fines on your record."
                                />
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-3">
                                    {notifications.into_iter().map(|notification| {
                                        let id = notification.id.clone();
                                        let is_read = {
                                            let id = id.clone();
                                            move || read.get().contains(&id)
                                        };
                                        let mark_read = {
                                            let id = id.clone();
                                            move |_| {
                                                read.update(|set| { set.insert(id.clone()); });
                                            }
                                        };
                                        let dismiss = move |_| {
                                            dismissed.update(|set| { set.insert(id.clone()); });
                                        };
                                        view! {
                                            <div class=move || format!(
                                                "bg-surface-elevated rounded-lg shadow p-4 flex items-start justify-between {}",
                                                if is_read() { "opacity-60" } else { "" }
                                            )>
                                                <div>
                                                    <p class="font-semibold text-fg">{notification.title}</p>
                                                    <p class="text-sm text-fg-muted">{notification.body}</p>
                                                </div>
                                                <div class="flex gap-2">
                                                    <button
                                                        class="text-sm text-fg-muted hover:text-fg"
                                                        on:click=mark_read
                                                    >
                                                        "Mark read"
                                                    </button>
                                                    <button
                                                        class="text-sm text-status-error-text hover:underline"
                                                        on:click=dismiss
                                                    >
                                                        "Dismiss"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
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

    fn violation(id: &str, paid: bool) -> Violation {
        Violation {
            id: id.into(),
            license_plate: "01234-116-16".into(),
            violation_type: "speeding".into(),
            location: "RN5, Alger".into(),
            violation_date: "2025-03-14T09:30".into(),
            fine_amount: 5000.0,
            paid,
            payment_date: None,
            insurance_policy: None,
            notes: None,
            officer_id: None,
        }
    }

    #[test]
    fn only_unpaid_violations_become_notifications() {
        let notifications =
            build_notifications(&[violation("v1", false), violation("v2", true)]);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, "v1");
    }

    #[test]
    fn notification_text_carries_fine_and_context() {
        let notifications = build_notifications(&[violation("v1", false)]);
        assert!(notifications[0].title.contains("5 000,00"));
        assert!(notifications[0].body.contains("RN5, Alger"));
        assert!(notifications[0].body.contains("14/03/2025"));
    }

    #[test]
    fn clean_record_produces_no_notifications() {
        assert!(build_notifications(&[violation("v1", true)]).is_empty());
        assert!(build_notifications(&[]).is_empty());
    }
}
