use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest, Role, UserProfile};
use crate::utils::storage;
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// A stored token is being validated against the backend.
    Loading,
    Authenticated,
    #[default]
    Unauthenticated,
}

/// In-memory session. Authenticated iff a token is held in durable storage
/// and the backend confirmed the profile behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub status: SessionStatus,
    /// Bumped by every teardown so in-flight calls can detect that the
    /// session they started under no longer exists.
    pub epoch: u64,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // Only enter Loading when there actually is a stored token to validate;
    // with no token the session is immediately Unauthenticated and no
    // request is spawned.
    if storage::stored_token().is_some() {
        set_auth_state.update(|state| state.status = SessionStatus::Loading);
        #[cfg(target_arch = "wasm32")]
        {
            let api = use_context::<ApiClient>().unwrap_or_default();
            leptos::spawn_local(async move {
                let _ = refresh_user(&api, (auth_state, set_auth_state)).await;
            });
        }
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Sends credentials and, on success, stores the session and returns the
/// role so the caller can navigate to the matching home view. Failures
/// leave the pre-existing session state in place.
pub async fn login_request(
    api: &ApiClient,
    request: LoginRequest,
    auth: AuthContext,
) -> Result<Role, ApiError> {
    let (state, set_state) = auth;
    let snapshot = state.get_untracked();
    let epoch = snapshot.epoch;
    let previous_status = snapshot.status;
    set_state.update(|s| s.status = SessionStatus::Loading);

    match api.login(request).await {
        Ok(response) => {
            if state.get_untracked().epoch != epoch {
                // Torn down while the call was in flight; honor the logout.
                storage::clear_token();
                return Err(ApiError::auth("Session was closed during sign-in"));
            }
            let role = response.user.role;
            set_state.update(|s| {
                s.user = Some(response.user);
                s.status = SessionStatus::Authenticated;
            });
            Ok(role)
        }
        Err(err) => {
            set_state.update(|s| {
                if s.epoch == epoch {
                    s.status = previous_status;
                }
            });
            Err(err)
        }
    }
}

/// Registration always creates a civil account. The caller is expected to
/// have run field validation first; the backend's field errors are still
/// surfaced through [`ApiError::Validation`] when it disagrees.
pub async fn register_request(
    api: &ApiClient,
    request: RegisterRequest,
    auth: AuthContext,
) -> Result<Role, ApiError> {
    let (state, set_state) = auth;
    let snapshot = state.get_untracked();
    let epoch = snapshot.epoch;
    let previous_status = snapshot.status;
    set_state.update(|s| s.status = SessionStatus::Loading);

    match api.register(request.clone()).await {
        Ok(response) => {
            if state.get_untracked().epoch != epoch {
                storage::clear_token();
                return Err(ApiError::auth("Session was closed during registration"));
            }
            let user = UserProfile::from_registration(&request, response.user_id);
            set_state.update(|s| {
                s.user = Some(user);
                s.status = SessionStatus::Authenticated;
            });
            Ok(Role::Civil)
        }
        Err(err) => {
            set_state.update(|s| {
                if s.epoch == epoch {
                    s.status = previous_status;
                }
            });
            Err(err)
        }
    }
}

/// Clears durable storage and resets the in-memory session. Idempotent and
/// safe to call with a request in flight; the epoch bump makes any such
/// request discard its result.
pub fn logout(set_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_state.update(|s| {
        s.user = None;
        s.status = SessionStatus::Unauthenticated;
        s.epoch += 1;
    });
}

/// Re-fetches the profile behind the stored token. Any failure is treated
/// as an authorization failure and forces a full logout.
pub async fn refresh_user(api: &ApiClient, auth: AuthContext) -> Result<UserProfile, ApiError> {
    let (state, set_state) = auth;
    let epoch = state.get_untracked().epoch;

    match api.current_user().await {
        Ok(user) => {
            if state.get_untracked().epoch != epoch {
                return Err(ApiError::auth("Session was closed during refresh"));
            }
            set_state.update(|s| {
                s.user = Some(user.clone());
                s.status = SessionStatus::Authenticated;
            });
            Ok(user)
        }
        Err(err) => {
            log::error!("Failed to refresh user: {err}");
            if state.get_untracked().epoch == epoch {
                logout(set_state);
            }
            Err(err)
        }
    }
}

pub fn use_login_action() -> Action<LoginRequest, Result<Role, ApiError>> {
    let auth = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let api = api.clone();
        async move { login_request(&api, request, auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<Role, ApiError>> {
    let auth = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &RegisterRequest| {
        let request = request.clone();
        let api = api.clone();
        async move { register_request(&api, request, auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn default_state_is_unauthenticated() {
        let state = AuthState::default();
        assert_eq!(state.status, SessionStatus::Unauthenticated);
        assert!(state.user.is_none());
        assert!(state.role().is_none());
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.user.is_none());
        });
    }
}
