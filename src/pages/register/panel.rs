use crate::{
    api::{ApiError, RegisterRequest},
    components::{
        error::InlineErrorMessage,
        forms::{SelectField, TextField},
    },
    pages::register::utils::{RegisterForm, VEHICLE_TYPES},
    state::auth,
    utils as nav,
};
use leptos::{ev::SubmitEvent, *};
use std::collections::HashMap;

/// Gate between the form and the network: a request is produced only when
/// client-side validation passes. On failure the field errors come back
/// and nothing is sent.
fn prepare_submission(form: &RegisterForm) -> Result<RegisterRequest, HashMap<String, String>> {
    let errors = form.validate();
    if errors.is_empty() {
        Ok(form.to_request())
    } else {
        Err(errors)
    }
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let form = create_rw_signal(RegisterForm {
        vehicle_type: VEHICLE_TYPES[0].to_string(),
        ..RegisterForm::default()
    });
    let field_errors = create_rw_signal(HashMap::<String, String>::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(role) => {
                    set_error.set(None);
                    nav::redirect(role.home_path());
                }
                Err(err) => {
                    // Field errors the backend reports land next to the
                    // inputs; everything else shows as a banner.
                    if let Some(fields) = err.field_errors() {
                        field_errors.set(fields.clone());
                    }
                    set_error.set(Some(err));
                }
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match prepare_submission(&form.get_untracked()) {
            Ok(request) => {
                field_errors.set(HashMap::new());
                set_error.set(None);
                register_action.dispatch(request);
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let error_for = move |field: &'static str| {
        Signal::derive(move || field_errors.get().get(field).cloned())
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Register as a driver"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Track and pay your traffic violations online"
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=handle_submit>
                    <TextField
                        id="name"
                        label="Full name"
                        value=Signal::derive(move || form.get().name)
                        on_input=Callback::new(move |value| form.update(|f| f.name = value))
                        error=error_for("name")
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.get().email)
                        on_input=Callback::new(move |value| form.update(|f| f.email = value))
                        error=error_for("email")
                    />
                    <TextField
                        id="phone"
                        label="Phone (9 digits)"
                        value=Signal::derive(move || form.get().phone)
                        on_input=Callback::new(move |value| form.update(|f| f.phone = value))
                        error=error_for("phone")
                    />
                    <TextField
                        id="cin"
                        label="National ID"
                        value=Signal::derive(move || form.get().cin)
                        on_input=Callback::new(move |value| form.update(|f| f.cin = value))
                        error=error_for("cin")
                    />
                    <TextField
                        id="license_plate"
                        label="License plate"
                        value=Signal::derive(move || form.get().license_plate)
                        on_input=Callback::new(move |value| form.update(|f| f.license_plate = value))
                        error=error_for("license_plate")
                    />
                    <SelectField
                        id="vehicle_type"
                        label="Vehicle type"
                        options=VEHICLE_TYPES.iter().map(|v| (*v, *v)).collect()
                        value=Signal::derive(move || form.get().vehicle_type)
                        on_change=Callback::new(move |value| form.update(|f| f.vehicle_type = value))
                        error=error_for("vehicle_type")
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || form.get().password)
                        on_input=Callback::new(move |value| form.update(|f| f.password = value))
                        error=error_for("password")
                    />
                    <TextField
                        id="confirm_password"
                        label="Confirm password"
                        input_type="password"
                        value=Signal::derive(move || form.get().confirm_password)
                        on_input=Callback::new(move |value| form.update(|f| f.confirm_password = value))
                        error=error_for("confirm_password")
                    />

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=pending
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creating account..." } else { "Create account" }}
                    </button>

                    <p class="text-center text-sm text-fg-muted">
                        "Already registered? "
                        <a href="/login" class="font-medium text-action-primary-bg hover:underline">
                            "Sign in"
                        </a>
                    </p>
                </form>
            </div>
        </div>
    }
}
