use crate::{
    api::{ApiError, LoginRequest},
    components::{error::InlineErrorMessage, forms::TextField},
    pages::login::utils,
    state::auth,
    utils as nav,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (identifier, set_identifier) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(role) => {
                    set_error.set(None);
                    nav::redirect(role.home_path());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let identifier = identifier.get_untracked();
        let password = password.get_untracked();

        if let Err(message) = utils::validate_credentials(&identifier, &password) {
            set_error.set(Some(ApiError::unexpected(message)));
            return;
        }

        set_error.set(None);
        login_action.dispatch(LoginRequest {
            identifier,
            password,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to Traffix"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Officers use their badge number, drivers their email"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <TextField
                        id="identifier"
                        label="Email or badge number"
                        value=identifier
                        on_input=Callback::new(move |value| set_identifier.set(value))
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |value| set_password.set(value))
                    />

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=pending
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>

                    <p class="text-center text-sm text-fg-muted">
                        "No account yet? "
                        <a href="/register" class="font-medium text-action-primary-bg hover:underline">
                            "Register as a driver"
                        </a>
                    </p>
                </form>
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
    fn login_panel_renders_form_and_register_link() {
        let html = render_to_string(move || {
            provide_auth_state(None, SessionStatus::Unauthenticated);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Sign in to Traffix"));
        assert!(html.contains("Email or badge number"));
        assert!(html.contains("/register"));
    }
}
