//! Services the host application provides to the screens.

use serde::{Deserialize, Serialize};

use crate::error::{DareError, ShareFailure};

/// Screen names known to the app.
pub mod route {
    pub const HOME: &str = "Home";
    pub const GAME_SETUP: &str = "GameSetup";
    pub const GAME_RULES: &str = "GameRules";
    pub const SETTINGS: &str = "Settings";
    pub const INFO: &str = "Info";
    pub const GAME_RESULTS: &str = "GameResults";
}

/// Screen-to-screen navigation.
pub trait Navigator {
    /// Whether `screen` has been registered with the host.
    fn is_registered(&self, screen: &str) -> bool;

    fn navigate_to(&mut self, screen: &str);

    /// Drop every screen above the start screen.
    fn return_to_start(&mut self);
}

/// Hands a text payload to whatever share target the host has.
pub trait ShareSink {
    fn share(&mut self, payload: &str) -> Result<(), ShareFailure>;
}

/// What to do when asked to open a screen the host never registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownScreenPolicy {
    /// Log a warning and stay put.
    #[default]
    Warn,
    /// Fail with `DareError::UnknownScreen`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Navigated,
    Ignored,
}

/// Navigate only if the target is registered.
pub fn go(
    nav: &mut dyn Navigator,
    screen: &str,
    policy: UnknownScreenPolicy,
) -> Result<NavOutcome, DareError> {
    if nav.is_registered(screen) {
        nav.navigate_to(screen);
        return Ok(NavOutcome::Navigated);
    }
    match policy {
        UnknownScreenPolicy::Warn => {
            tracing::warn!(screen, "Screen not found");
            Ok(NavOutcome::Ignored)
        },
        UnknownScreenPolicy::Reject => Err(DareError::UnknownScreen(screen.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingNavigator;

    #[test]
    fn registered_screen_is_opened() {
        let mut nav = RecordingNavigator::with_routes(&[route::GAME_SETUP]);
        let outcome = go(&mut nav, route::GAME_SETUP, UnknownScreenPolicy::Warn).unwrap();
        assert_eq!(outcome, NavOutcome::Navigated);
        assert_eq!(nav.visited, vec![route::GAME_SETUP.to_string()]);
    }

    #[test]
    fn unknown_screen_is_ignored_when_warning() {
        let mut nav = RecordingNavigator::with_routes(&[route::GAME_SETUP]);
        let outcome = go(&mut nav, route::SETTINGS, UnknownScreenPolicy::Warn).unwrap();
        assert_eq!(outcome, NavOutcome::Ignored);
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn unknown_screen_is_an_error_when_rejecting() {
        let mut nav = RecordingNavigator::with_routes(&[]);
        let err = go(&mut nav, route::INFO, UnknownScreenPolicy::Reject).unwrap_err();
        assert_eq!(err, DareError::UnknownScreen("Info".to_string()));
        assert!(nav.visited.is_empty());
    }
}
