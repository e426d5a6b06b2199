use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::CivilHomePanel;

#[component]
pub fn CivilHomePage() -> impl IntoView {
    view! { <CivilHomePanel /> }
}
