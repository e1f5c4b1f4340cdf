//! Application navigation expressed as an explicit state machine.
//!
//! The shell owns a single [`AppState`] value and advances it through
//! [`AppState::apply`]; there is no ad-hoc view swapping. Events that make no
//! sense in the current state are ignored and leave the state unchanged.

use serde::{Deserialize, Serialize};

/// Which dashboard panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardPage {
    Generate,
    Records,
}

/// The shell's top-level screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppState {
    Login,
    Signup,
    Dashboard {
        username: String,
        page: DashboardPage,
    },
}

/// Everything the shell can report back to the state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    LoginSucceeded { username: String },
    LoginFailed,
    GoToSignup,
    SignupCompleted,
    SelectPage(DashboardPage),
    Logout,
}

impl AppState {
    /// Single transition function. Consumes the current state and returns the
    /// next one; invalid event/state pairs are no-ops.
    pub fn apply(self, event: AppEvent) -> AppState {
        match (self, event) {
            (AppState::Login, AppEvent::LoginSucceeded { username }) => AppState::Dashboard {
                username,
                page: DashboardPage::Generate,
            },
            (AppState::Login, AppEvent::GoToSignup) => AppState::Signup,
            (AppState::Signup, AppEvent::SignupCompleted) => AppState::Login,
            (AppState::Dashboard { username, .. }, AppEvent::SelectPage(page)) => {
                AppState::Dashboard { username, page }
            }
            (AppState::Dashboard { .. }, AppEvent::Logout) => AppState::Login,
            (state, _) => state,
        }
    }
}
