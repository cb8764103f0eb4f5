//! Global Application State
//!
//! Reactive state management using Leptos signals. The auth state is the
//! single source of truth for what the app renders; the rest is toast and
//! footer bookkeeping.

use leptos::*;

use crate::api;
use crate::session::bootstrap::AuthState;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The one authoritative auth state (see [`AuthState`])
    pub auth: RwSignal<AuthState>,
    /// Backend base URL, mirroring the persisted value so views update
    /// when it is saved in Settings
    pub api_base: RwSignal<String>,
    /// When the profile was last fetched successfully (epoch millis)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Error message (for toasts); distinct from `AuthState::Error`,
    /// which replaces the whole view
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        auth: create_rw_signal(AuthState::Loading),
        api_base: create_rw_signal(api::get_api_base()),
        last_refresh: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Record a successful profile fetch
    pub fn mark_refreshed(&self) {
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
