//! Context wiring for the two shells: the back-office (bearer token, persisted
//! session) and the consumer app (cookie session, locale-prefixed routes).

use leptos::*;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ClientOptions},
    components::guard::provide_permission_table,
    locale::Locale,
    permissions::PermissionTable,
    state::{
        app::AppStore,
        auth::{
            provide_auth, restore_admin_session, restore_consumer_session, AdminAuthStore,
            ConsumerAuthStore,
        },
        challenge::ChallengeStore,
        checkin::CheckinStore,
        invite::InviteStore,
        paged::UserListStore,
        wallet::WalletStore,
    },
    utils::{
        navigation::{BrowserNavigator, NavigatorHandle, CONSUMER_LOGIN_PATH, LOGIN_PATH},
        storage::{self as storage_utils, KeyValueStorage},
    },
};

/// What a shell needs from its surroundings.
#[derive(Clone)]
pub struct AppEnvironment {
    pub storage: Rc<dyn KeyValueStorage>,
    pub navigator: NavigatorHandle,
    pub base_url: Option<String>,
}

impl AppEnvironment {
    pub fn browser() -> Self {
        Self {
            storage: storage_utils::default_storage(),
            navigator: NavigatorHandle::new(BrowserNavigator),
            base_url: None,
        }
    }

    fn client(&self, options: ClientOptions) -> ApiClient {
        let client = match &self.base_url {
            Some(base_url) => ApiClient::new_with_base_url(options, base_url.clone()),
            None => ApiClient::new(options),
        };
        client.with_storage(Rc::clone(&self.storage))
    }
}

pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(ClientOptions::admin()))
}

/// Back-office context: persisted session and UI prefs, the default
/// permission table, and a client whose 401 hook signs the admin out.
pub fn provide_admin_app(env: AppEnvironment) -> AdminAuthStore {
    let auth = AdminAuthStore::persisted(Rc::clone(&env.storage));

    let hook_auth = auth.clone();
    let hook_navigator = env.navigator.clone();
    let client = env
        .client(ClientOptions::admin())
        .on_unauthorized(move || {
            hook_auth.reset();
            hook_navigator.navigate(LOGIN_PATH);
        });

    provide_api_client(client);
    provide_context(env.navigator.clone());
    provide_auth(auth.clone());
    provide_context(AppStore::persisted(Rc::clone(&env.storage)));
    provide_context(UserListStore::new());
    provide_permission_table(PermissionTable::admin_defaults());
    auth
}

/// Consumer context. Domain stores live in memory only; the session is the
/// server's cookie.
pub fn provide_consumer_app(env: AppEnvironment) -> ConsumerAuthStore {
    let auth = ConsumerAuthStore::new();
    let wallet = WalletStore::new();

    let hook_auth = auth.clone();
    let hook_navigator = env.navigator.clone();
    let client = env
        .client(ClientOptions::consumer())
        .on_unauthorized(move || {
            hook_auth.reset();
            wallet.reset();
            hook_navigator.navigate(&Locale::current().localize_path(CONSUMER_LOGIN_PATH));
        });

    provide_api_client(client);
    provide_context(env.navigator.clone());
    provide_auth(auth.clone());
    provide_context(ChallengeStore::new());
    provide_context(CheckinStore::new());
    provide_context(InviteStore::new());
    provide_context(wallet);
    auth
}

/// Root of the back-office. Re-checks a hydrated session once on mount.
#[component]
pub fn AdminApp(children: Children) -> impl IntoView {
    let auth = provide_admin_app(AppEnvironment::browser());
    if auth.is_logged_in() {
        let client = use_api_client();
        spawn_local(async move {
            if let Err(err) = restore_admin_session(&client, &auth).await {
                log::warn!("Could not confirm stored session: {}", err);
            }
        });
    }
    children()
}

#[component]
pub fn ConsumerApp(children: Children) -> impl IntoView {
    let auth = provide_consumer_app(AppEnvironment::browser());
    let client = use_api_client();
    spawn_local(async move {
        match restore_consumer_session(&client, &auth).await {
            Ok(true) => log::debug!("Consumer session restored"),
            Ok(false) => {}
            Err(err) => log::warn!("Could not load profile: {}", err),
        }
    });
    children()
}
