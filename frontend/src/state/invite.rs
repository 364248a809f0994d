use leptos::*;

use crate::api::{InviteStats, InvitedUser};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteState {
    pub stats: Option<InviteStats>,
    pub invite_list: Vec<InvitedUser>,
    pub invite_code: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct InviteStore {
    state: RwSignal<InviteState>,
}

impl InviteStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(InviteState::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<InviteState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> InviteState {
        self.state.get_untracked()
    }

    pub fn set_stats(&self, stats: Option<InviteStats>) {
        self.state.update(|s| s.stats = stats);
    }

    pub fn set_invite_list(&self, invite_list: Vec<InvitedUser>) {
        self.state.update(|s| s.invite_list = invite_list);
    }

    pub fn set_invite_code(&self, invite_code: Option<String>) {
        self.state.update(|s| s.invite_code = invite_code);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.error = error);
    }

    pub fn reset(&self) {
        self.state.set(InviteState::default());
    }
}

impl Default for InviteStore {
    fn default() -> Self {
        Self::new()
    }
}
