use crate::state::auth::{use_auth, SessionStatus};
use crate::utils;
use leptos::*;

/// Landing page. An authenticated visitor is sent straight to the home view
/// of their role, an unauthenticated one to the login form; the markup below
/// only shows while the session is still resolving.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();

    create_effect(move |_| {
        let state = auth.get();
        match state.status {
            SessionStatus::Authenticated => {
                if let Some(role) = state.role() {
                    utils::redirect(role.home_path());
                }
            }
            SessionStatus::Unauthenticated => utils::redirect("/login"),
            SessionStatus::Loading => {}
        }
    });

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Traffix"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Traffic violation management for officers and drivers"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center sm:gap-4 lg:mt-8">
                        <div class="rounded-md shadow">
                            <a href="/login" class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover lg:py-4 lg:text-lg lg:px-10">
                                "Sign in"
                            </a>
                        </div>
                        <div class="mt-3 rounded-md shadow sm:mt-0">
                            <a href="/register" class="w-full flex items-center justify-center px-8 py-3 border border-border text-base font-medium rounded-md text-fg bg-surface-elevated hover:bg-surface-muted lg:py-4 lg:text-lg lg:px-10">
                                "Create an account"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::SessionStatus;
    use crate::test_support::helpers::provide_auth_state;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_page_offers_both_entry_points() {
        let html = render_to_string(move || {
            provide_auth_state(None, SessionStatus::Unauthenticated);
            view! { <HomePage /> }
        });
        assert!(html.contains("Sign in"));
        assert!(html.contains("Create an account"));
    }
}
