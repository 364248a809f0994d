use leptos::*;

use crate::api::{AppUserInfo, WalletInfo};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub user_info: Option<AppUserInfo>,
    pub wallet_info: Option<WalletInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Profile and balances shown on the consumer wallet and profile screens.
#[derive(Clone, Copy)]
pub struct WalletStore {
    state: RwSignal<WalletState>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(WalletState::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<WalletState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> WalletState {
        self.state.get_untracked()
    }

    pub fn set_user_info(&self, user_info: Option<AppUserInfo>) {
        self.state.update(|s| s.user_info = user_info);
    }

    pub fn set_wallet_info(&self, wallet_info: Option<WalletInfo>) {
        self.state.update(|s| s.wallet_info = wallet_info);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.error = error);
    }

    pub fn reset(&self) {
        self.state.set(WalletState::default());
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}
