#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, UserProfile};
    use crate::state::auth::{AuthState, SessionStatus};
    use leptos::*;

    pub fn police_user() -> UserProfile {
        UserProfile {
            id: "u-police".into(),
            name: "Agent Benali".into(),
            email: "benali@traffix.dz".into(),
            role: Role::Police,
            phone: None,
            cin: None,
            license_plate: None,
            vehicle_type: None,
            badge_number: Some("badge1".into()),
        }
    }

    pub fn civil_user() -> UserProfile {
        UserProfile {
            id: "u-civil".into(),
            name: "Sami Cherif".into(),
            email: "sami@example.dz".into(),
            role: Role::Civil,
            phone: Some("551234567".into()),
            cin: Some("123456789".into()),
            license_plate: Some("01234-116-16".into()),
            vehicle_type: Some("Voiture".into()),
            badge_number: None,
        }
    }

    pub fn provide_auth_state(
        user: Option<UserProfile>,
        status: SessionStatus,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            status,
            epoch: 0,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
