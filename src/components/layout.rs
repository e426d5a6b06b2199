use crate::api::Role;
use crate::state::auth::{self, use_auth};
use crate::utils;
use leptos::*;

#[component]
pub fn AppHeader() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let role = create_memo(move |_| auth.get().role());
    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::logout(set_auth);
        utils::redirect("/login");
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"Traffix"</h1>
                        <span class="text-sm text-fg-muted">{user_name}</span>
                    </div>
                    <nav class="flex items-center space-x-4">
                        <Show when=move || role.get() == Some(Role::Police)>
                            <a href="/police" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Dashboard"
                            </a>
                            <a href="/police/violation-entry" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Record violation"
                            </a>
                            <a href="/police/vehicle-info" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Vehicle lookup"
                            </a>
                        </Show>
                        <Show when=move || role.get() == Some(Role::Civil)>
                            <a href="/civil" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "My violations"
                            </a>
                        </Show>
                        <a href="/notifications" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Notifications"
                        </a>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Sign out"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <AppHeader/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
