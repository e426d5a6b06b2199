use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-md mx-auto text-center space-y-6 py-12 px-4">
                <div class="mx-auto w-16 h-16 flex items-center justify-center rounded-full bg-status-success-bg text-status-success-text">
                    <i class="fas fa-check text-2xl"></i>
                </div>
                <h2 class="text-2xl font-bold text-fg">"Violation recorded"</h2>
                <p class="text-sm text-fg-muted">
                    "The violation has been saved and the driver will see it on their next sign-in."
                </p>
                <div class="flex justify-center gap-3">
                    <a
                        href="/police/violation-entry"
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                    >
                        "Record another"
                    </a>
                    <a
                        href="/police"
                        class="px-4 py-2 rounded-md text-sm font-medium text-fg bg-surface-muted hover:bg-surface-elevated"
                    >
                        "Back to dashboard"
                    </a>
                </div>
            </div>
        </Layout>
    }
}
