use leptos::*;

/// Labelled text input wired to a controlled signal. A field-level error,
/// when present, is rendered under the input and flips the border color.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let has_error = move || error.map(|e| e.get().is_some()).unwrap_or(false);

    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label for=id class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                class=move || format!(
                    "rounded-xl border-2 bg-form-control-bg py-2.5 px-4 text-sm shadow-sm {}",
                    if has_error() {
                        "border-status-error-border"
                    } else {
                        "border-form-control-border hover:border-action-primary-border-hover"
                    }
                )
                value=move || value.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.and_then(|e| e.get()).map(|message| view! {
                <p class="text-xs text-status-error-text ml-1">{message}</p>
            })}
        </div>
    }
}

/// Labelled select over a fixed option list. Options are `(value, label)`
/// pairs so the stored value can stay machine-readable.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label for=id class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <select
                id=id
                name=id
                class="rounded-xl border-2 border-form-control-border bg-form-control-bg py-2.5 px-4 text-sm shadow-sm"
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options.into_iter().map(|(option_value, option_label)| {
                    let selected = {
                        let value = value.clone();
                        move || value.get() == option_value
                    };
                    view! {
                        <option value=option_value selected=selected>{option_label}</option>
                    }
                }).collect_view()}
            </select>
            {move || error.and_then(|e| e.get()).map(|message| view! {
                <p class="text-xs text-status-error-text ml-1">{message}</p>
            })}
        </div>
    }
}
