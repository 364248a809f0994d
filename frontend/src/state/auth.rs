use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

use crate::{
    api::{AdminLoginRequest, AdminUserInfo, ApiClient, ApiError, AppUserInfo, LoginRequest},
    utils::storage::{self as storage_utils, KeyValueStorage, TOKEN_KEY, USER_INFO_KEY},
};

/// Profile record a session carries.
pub trait SessionUser: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    const LOGOUT_PATH: &'static str;

    /// Role used for permission checks; `None` for users without one.
    fn role(&self) -> Option<i32>;
}

impl SessionUser for AdminUserInfo {
    const LOGOUT_PATH: &'static str = "/admin/auth/logout";

    fn role(&self) -> Option<i32> {
        Some(self.role)
    }
}

impl SessionUser for AppUserInfo {
    const LOGOUT_PATH: &'static str = "/app/auth/logout";

    fn role(&self) -> Option<i32> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState<U> {
    pub token: Option<String>,
    pub user: Option<U>,
    pub is_logged_in: bool,
    pub loading: bool,
}

impl<U> Default for AuthState<U> {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_logged_in: false,
            loading: false,
        }
    }
}

impl<U: SessionUser> AuthState<U> {
    pub fn role(&self) -> Option<i32> {
        self.user.as_ref().and_then(SessionUser::role)
    }
}

/// Session container. When built with [`AuthStore::persisted`] the token and
/// profile are mirrored to durable storage under `token` / `userInfo`.
pub struct AuthStore<U: SessionUser> {
    state: RwSignal<AuthState<U>>,
    storage: Option<Rc<dyn KeyValueStorage>>,
}

impl<U: SessionUser> Clone for AuthStore<U> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            storage: self.storage.clone(),
        }
    }
}

impl<U: SessionUser> AuthStore<U> {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AuthState::default()),
            storage: None,
        }
    }

    /// Builds the store and hydrates it from whatever `storage` already holds.
    pub fn persisted(storage: Rc<dyn KeyValueStorage>) -> Self {
        let token = storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = storage_utils::read_json::<U>(storage.as_ref(), USER_INFO_KEY);
        let hydrated = AuthState {
            is_logged_in: token.is_some(),
            token,
            user,
            loading: false,
        };
        Self {
            state: create_rw_signal(hydrated),
            storage: Some(storage),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState<U>> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> AuthState<U> {
        self.state.get_untracked()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with_untracked(|s| s.is_logged_in)
    }

    /// An empty token counts as no token.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = Some(token.into()).filter(|t| !t.is_empty());
        if let Some(storage) = &self.storage {
            match &token {
                Some(value) => {
                    if let Err(err) = storage.set_item(TOKEN_KEY, value) {
                        log::warn!("Failed to persist token: {}", err);
                    }
                }
                None => storage.remove_item(TOKEN_KEY),
            }
        }
        self.state.update(|s| {
            s.is_logged_in = token.is_some();
            s.token = token;
        });
    }

    pub fn set_user(&self, user: Option<U>) {
        if let Some(storage) = &self.storage {
            match &user {
                Some(value) => {
                    if let Err(err) =
                        storage_utils::write_json(storage.as_ref(), USER_INFO_KEY, value)
                    {
                        log::warn!("Failed to persist user info: {}", err);
                    }
                }
                None => storage.remove_item(USER_INFO_KEY),
            }
        }
        self.state.update(|s| s.user = user);
    }

    /// Cookie sessions have no client-visible token.
    pub fn set_logged_in(&self, is_logged_in: bool) {
        self.state.update(|s| s.is_logged_in = is_logged_in);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn reset(&self) {
        if let Some(storage) = &self.storage {
            storage_utils::clear_session(storage.as_ref());
        }
        self.state.set(AuthState::default());
    }
}

impl<U: SessionUser> Default for AuthStore<U> {
    fn default() -> Self {
        Self::new()
    }
}

pub type AdminAuthStore = AuthStore<AdminUserInfo>;
pub type ConsumerAuthStore = AuthStore<AppUserInfo>;

pub fn provide_auth<U: SessionUser>(store: AuthStore<U>) {
    provide_context(store);
}

pub fn use_auth<U: SessionUser>() -> AuthStore<U> {
    use_context::<AuthStore<U>>().unwrap_or_default()
}

pub async fn login_admin(
    client: &ApiClient,
    store: &AdminAuthStore,
    request: &AdminLoginRequest,
) -> Result<(), ApiError> {
    store.set_loading(true);
    match client.admin_login(request).await {
        Ok(response) => {
            store.set_token(response.token);
            store.set_user(Some(response.admin_info));
            store.set_loading(false);
            Ok(())
        }
        Err(error) => {
            store.set_loading(false);
            Err(error)
        }
    }
}

pub async fn login_consumer(
    client: &ApiClient,
    store: &ConsumerAuthStore,
    request: &LoginRequest,
) -> Result<(), ApiError> {
    store.set_loading(true);
    match client.login(request).await {
        Ok(response) => {
            store.set_token(response.token);
            store.set_user(Some(response.user_info));
            store.set_logged_in(true);
            store.set_loading(false);
            Ok(())
        }
        Err(error) => {
            store.set_loading(false);
            Err(error)
        }
    }
}

/// Ends the session on the server and locally. The local session is
/// dropped even when the server call fails.
pub async fn logout<U: SessionUser>(
    client: &ApiClient,
    store: &AuthStore<U>,
) -> Result<(), ApiError> {
    let result = client.execute_empty(U::LOGOUT_PATH).await.map(|_| ());
    if let Err(err) = &result {
        log::warn!("Logout request failed: {}", err);
    }
    store.reset();
    result
}

/// Confirms a hydrated admin session against the server. Returns whether
/// the session is still valid.
pub async fn restore_admin_session(
    client: &ApiClient,
    store: &AdminAuthStore,
) -> Result<bool, ApiError> {
    if !store.is_logged_in() {
        return Ok(false);
    }
    store.set_loading(true);
    let outcome = client.admin_me().await;
    store.set_loading(false);
    match outcome {
        Ok(me) => {
            if let Some(user) = store.snapshot().user {
                if user.id != me.admin_id {
                    log::warn!("Stored profile {} does not match session {}", user.id, me.admin_id);
                }
            }
            Ok(true)
        }
        Err(ApiError::Unauthorized) => {
            store.reset();
            Ok(false)
        }
        Err(error) => Err(error),
    }
}

/// Cookie sessions are only visible to the server, so the profile fetch
/// doubles as the session check.
pub async fn restore_consumer_session(
    client: &ApiClient,
    store: &ConsumerAuthStore,
) -> Result<bool, ApiError> {
    store.set_loading(true);
    let outcome = client.user_info().await;
    store.set_loading(false);
    match outcome {
        Ok(user) => {
            store.set_user(Some(user));
            store.set_logged_in(true);
            Ok(true)
        }
        Err(ApiError::Unauthorized) => {
            store.reset();
            Ok(false)
        }
        Err(error) => Err(error),
    }
}
