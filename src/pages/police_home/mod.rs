use leptos::*;

pub mod repository;

mod panel;

pub use panel::PoliceHomePanel;

#[component]
pub fn PoliceHomePage() -> impl IntoView {
    view! { <PoliceHomePanel /> }
}
