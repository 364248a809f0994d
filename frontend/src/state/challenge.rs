use leptos::*;

use crate::api::Challenge;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeState {
    pub challenges: Vec<Challenge>,
    pub current_challenge: Option<Challenge>,
    pub my_challenges: Vec<Challenge>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct ChallengeStore {
    state: RwSignal<ChallengeState>,
}

impl ChallengeStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(ChallengeState::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<ChallengeState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> ChallengeState {
        self.state.get_untracked()
    }

    pub fn set_challenges(&self, challenges: Vec<Challenge>) {
        self.state.update(|s| s.challenges = challenges);
    }

    pub fn set_current_challenge(&self, challenge: Option<Challenge>) {
        self.state.update(|s| s.current_challenge = challenge);
    }

    pub fn set_my_challenges(&self, challenges: Vec<Challenge>) {
        self.state.update(|s| s.my_challenges = challenges);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.error = error);
    }

    pub fn reset(&self) {
        self.state.set(ChallengeState::default());
    }
}

impl Default for ChallengeStore {
    fn default() -> Self {
        Self::new()
    }
}
