use crate::api::Role;
use crate::components::layout::LoadingSpinner;
use crate::state::auth::{use_auth, SessionStatus};
use crate::utils;
use leptos::*;

/// What the guard decided for the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; render a neutral placeholder.
    Pending,
    RedirectToLogin,
    /// Signed in, but the view belongs to the other role.
    RedirectToHome(Role),
    Allow,
}

/// Pure routing decision over the session snapshot. Re-evaluated on every
/// render, never cached.
pub fn decide(
    status: SessionStatus,
    user_role: Option<Role>,
    required_role: Option<Role>,
) -> RouteDecision {
    match status {
        SessionStatus::Loading => RouteDecision::Pending,
        SessionStatus::Unauthenticated => RouteDecision::RedirectToLogin,
        SessionStatus::Authenticated => match (required_role, user_role) {
            (Some(required), Some(actual)) if required != actual => {
                RouteDecision::RedirectToHome(actual)
            }
            _ => RouteDecision::Allow,
        },
    }
}

#[component]
pub fn RequireAuth(
    #[prop(optional, into)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| {
        let state = auth.get();
        decide(state.status, state.role(), role)
    });
    create_effect(move |_| match decision.get() {
        RouteDecision::RedirectToLogin => utils::redirect("/login"),
        RouteDecision::RedirectToHome(role) => utils::redirect(role.home_path()),
        RouteDecision::Pending | RouteDecision::Allow => {}
    });
    view! {
        <Show
            when=move || decision.get() == RouteDecision::Allow
            fallback=move || {
                if decision.get() == RouteDecision::Pending {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}
