use leptos::*;

pub mod repository;
pub mod utils;

mod panel;

pub use panel::ViolationEntryPanel;

#[component]
pub fn ViolationEntryPage() -> impl IntoView {
    view! { <ViolationEntryPanel /> }
}
