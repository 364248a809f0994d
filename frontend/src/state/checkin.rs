use leptos::*;

use crate::api::{CalendarDay, CheckInRecord, TodayStats};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinState {
    pub today_stats: Option<TodayStats>,
    pub today_list: Vec<CheckInRecord>,
    pub calendar: Vec<CalendarDay>,
    pub history: Vec<CheckInRecord>,
    pub has_checked_in_today: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct CheckinStore {
    state: RwSignal<CheckinState>,
}

impl CheckinStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(CheckinState::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<CheckinState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> CheckinState {
        self.state.get_untracked()
    }

    pub fn set_today_stats(&self, stats: Option<TodayStats>) {
        self.state.update(|s| s.today_stats = stats);
    }

    pub fn set_today_list(&self, list: Vec<CheckInRecord>) {
        self.state.update(|s| s.today_list = list);
    }

    pub fn set_calendar(&self, calendar: Vec<CalendarDay>) {
        self.state.update(|s| s.calendar = calendar);
    }

    pub fn set_history(&self, history: Vec<CheckInRecord>) {
        self.state.update(|s| s.history = history);
    }

    pub fn set_has_checked_in_today(&self, checked: bool) {
        self.state.update(|s| s.has_checked_in_today = checked);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.error = error);
    }

    pub fn reset(&self) {
        self.state.set(CheckinState::default());
    }
}

impl Default for CheckinStore {
    fn default() -> Self {
        Self::new()
    }
}
