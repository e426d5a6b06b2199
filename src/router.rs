use leptos::*;
use leptos_router::*;

use crate::{
    api::Role,
    components::guard::RequireAuth,
    pages::{
        civil_home::CivilHomePage, confirmation::ConfirmationPage, home::HomePage,
        login::LoginPage, notifications::NotificationsPage, police_home::PoliceHomePage,
        register::RegisterPage, vehicle_info::VehicleInfoPage,
        violation_entry::ViolationEntryPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/police",
    "/police/violation-entry",
    "/police/vehicle-info",
    "/police/confirmation",
    "/civil",
    "/notifications",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/police",
    "/police/violation-entry",
    "/police/vehicle-info",
    "/police/confirmation",
    "/civil",
    "/notifications",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/police" view=ProtectedPoliceHome/>
                    <Route path="/police/violation-entry" view=ProtectedViolationEntry/>
                    <Route path="/police/vehicle-info" view=ProtectedVehicleInfo/>
                    <Route path="/police/confirmation" view=ProtectedConfirmation/>
                    <Route path="/civil" view=ProtectedCivilHome/>
                    <Route path="/notifications" view=ProtectedNotifications/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedPoliceHome() -> impl IntoView {
    view! { <RequireAuth role=Role::Police><PoliceHomePage/></RequireAuth> }
}

#[component]
fn ProtectedViolationEntry() -> impl IntoView {
    view! { <RequireAuth role=Role::Police><ViolationEntryPage/></RequireAuth> }
}

#[component]
fn ProtectedVehicleInfo() -> impl IntoView {
    view! { <RequireAuth role=Role::Police><VehicleInfoPage/></RequireAuth> }
}

#[component]
fn ProtectedConfirmation() -> impl IntoView {
    view! { <RequireAuth role=Role::Police><ConfirmationPage/></RequireAuth> }
}

#[component]
fn ProtectedCivilHome() -> impl IntoView {
    view! { <RequireAuth role=Role::Civil><CivilHomePage/></RequireAuth> }
}

#[component]
fn ProtectedNotifications() -> impl IntoView {
    view! { <RequireAuth><NotificationsPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_both_role_homes() {
        assert!(ROUTE_PATHS.contains(&"/police"));
        assert!(ROUTE_PATHS.contains(&"/civil"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn public_and_protected_routes_partition_the_table() {
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        assert!(public.is_disjoint(&protected));
        assert_eq!(public.len() + protected.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
