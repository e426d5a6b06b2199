use crate::{
    api::{ApiClient, ApiError, NewViolation},
    components::{
        error::InlineErrorMessage,
        forms::{SelectField, TextField},
        layout::Layout,
    },
    pages::violation_entry::{
        repository,
        utils::{default_violation_date, fine_for, ViolationEntryForm, VIOLATION_TYPES},
    },
    state::auth::use_auth,
    utils as nav,
};
use leptos::{ev::SubmitEvent, *};
use std::collections::HashMap;

#[component]
pub fn ViolationEntryPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let form = create_rw_signal(ViolationEntryForm {
        violation_type: VIOLATION_TYPES[0].0.to_string(),
        violation_date: default_violation_date(),
        fine_amount: VIOLATION_TYPES[0].2,
        ..ViolationEntryForm::default()
    });
    // The fine is edited as text and parsed on submit so a half-typed
    // amount does not bounce the cursor.
    let fine_input = create_rw_signal(VIOLATION_TYPES[0].2.to_string());
    let field_errors = create_rw_signal(HashMap::<String, String>::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let api = use_context::<ApiClient>().unwrap_or_default();
    let submit_action = create_action(move |payload: &NewViolation| {
        let api = api.clone();
        let payload = payload.clone();
        async move { repository::submit_violation(&api, &payload).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    set_error.set(None);
                    field_errors.set(HashMap::new());
                    // Reset the form for the next stop, keeping the clock.
                    form.update(|f| {
                        let date = f.violation_date.clone();
                        *f = ViolationEntryForm {
                            violation_type: VIOLATION_TYPES[0].0.to_string(),
                            violation_date: date,
                            fine_amount: VIOLATION_TYPES[0].2,
                            ..ViolationEntryForm::default()
                        };
                    });
                    fine_input.set(VIOLATION_TYPES[0].2.to_string());
                    nav::redirect("/police/confirmation");
                }
                Err(err) => {
                    if let Some(fields) = err.field_errors() {
                        field_errors.set(fields.clone());
                    }
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_type_change = Callback::new(move |value: String| {
        if let Some(fine) = fine_for(&value) {
            fine_input.set(fine.to_string());
            form.update(|f| f.fine_amount = fine);
        }
        form.update(|f| f.violation_type = value);
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let mut snapshot = form.get_untracked();
        snapshot.fine_amount = fine_input.get_untracked().parse().unwrap_or(0.0);

        let errors = snapshot.validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        let Some(officer_id) = auth.get_untracked().user.map(|u| u.id) else {
            set_error.set(Some(ApiError::unexpected("Officer profile is missing")));
            return;
        };
        field_errors.set(HashMap::new());
        set_error.set(None);
        submit_action.dispatch(snapshot.build_payload(&officer_id));
    };

    let error_for = move |field: &'static str| {
        Signal::derive(move || field_errors.get().get(field).cloned())
    };

    view! {
        <Layout>
            <div class="max-w-2xl mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Record a violation"</h2>
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField
                        id="license_plate"
                        label="License plate"
                        value=Signal::derive(move || form.get().license_plate)
                        on_input=Callback::new(move |value| form.update(|f| f.license_plate = value))
                        error=error_for("license_plate")
                    />
                    <SelectField
                        id="violation_type"
                        label="Violation type"
                        options=VIOLATION_TYPES.iter().map(|(code, label, _)| (*code, *label)).collect()
                        value=Signal::derive(move || form.get().violation_type)
                        on_change=on_type_change
                        error=error_for("violation_type")
                    />
                    <TextField
                        id="fine_amount"
                        label="Fine (DZD)"
                        value=fine_input
                        on_input=Callback::new(move |value| fine_input.set(value))
                        error=error_for("fine_amount")
                    />
                    <TextField
                        id="location"
                        label="Location"
                        placeholder="Road or intersection"
                        value=Signal::derive(move || form.get().location)
                        on_input=Callback::new(move |value| form.update(|f| f.location = value))
                        error=error_for("location")
                    />
                    <TextField
                        id="violation_date"
                        label="Date and time"
                        input_type="datetime-local"
                        value=Signal::derive(move || form.get().violation_date)
                        on_input=Callback::new(move |value| form.update(|f| f.violation_date = value))
                        error=error_for("violation_date")
                    />
                    <TextField
                        id="insurance_policy"
                        label="Insurance policy"
                        value=Signal::derive(move || form.get().insurance_policy)
                        on_input=Callback::new(move |value| form.update(|f| f.insurance_policy = value))
                        error=error_for("insurance_policy")
                    />
                    <TextField
                        id="notes"
                        label="Notes (optional)"
                        value=Signal::derive(move || form.get().notes)
                        on_input=Callback::new(move |value| form.update(|f| f.notes = value))
                    />

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=pending
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit violation" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::SessionStatus;
    use crate::test_support::helpers::{police_user, provide_auth_state};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn entry_form_renders_catalog_and_prefilled_fine() {
        let html = render_to_string(move || {
            provide_auth_state(Some(police_user()), SessionStatus::Authenticated);
            view! { <ViolationEntryPanel /> }
        });
        assert!(html.contains("Record a violation"));
        assert!(html.contains("Drunk driving"));
        assert!(html.contains("5000"));
    }
}
