use crate::capability::{NavOutcome, Navigator, UnknownScreenPolicy, go, route};
use crate::error::DareError;

/// A button on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const DEFAULT_MENU: [MenuItem; 4] = [
    MenuItem {
        label: "START GAME",
        target: route::GAME_SETUP,
    },
    MenuItem {
        label: "GAME RULES",
        target: route::GAME_RULES,
    },
    MenuItem {
        label: "SETTINGS",
        target: route::SETTINGS,
    },
    MenuItem {
        label: "INFO",
        target: route::INFO,
    },
];

/// The main menu.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    items: Vec<MenuItem>,
    policy: UnknownScreenPolicy,
}

impl HomeScreen {
    pub fn new(policy: UnknownScreenPolicy) -> Self {
        Self {
            items: DEFAULT_MENU.to_vec(),
            policy,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn policy(&self) -> UnknownScreenPolicy {
        self.policy
    }

    /// Press the button at `index` (zero-based).
    pub fn press(&self, index: usize, nav: &mut dyn Navigator) -> Result<NavOutcome, DareError> {
        let item = self
            .items
            .get(index)
            .ok_or_else(|| DareError::NoSuchMenuItem((index + 1).to_string()))?;
        go(nav, item.target, self.policy)
    }

    /// Press the button whose label matches, ignoring case.
    pub fn press_label(
        &self,
        label: &str,
        nav: &mut dyn Navigator,
    ) -> Result<NavOutcome, DareError> {
        let label = label.trim();
        let index = self
            .items
            .iter()
            .position(|item| item.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| DareError::NoSuchMenuItem(label.to_string()))?;
        self.press(index, nav)
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new(UnknownScreenPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingNavigator;

    #[test]
    fn menu_order() {
        let labels: Vec<_> = HomeScreen::default().items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["START GAME", "GAME RULES", "SETTINGS", "INFO"]);
    }

    #[test]
    fn start_game_opens_setup() {
        let mut nav = RecordingNavigator::with_routes(&[route::GAME_SETUP, route::GAME_RULES]);
        let home = HomeScreen::default();
        assert_eq!(home.press(0, &mut nav).unwrap(), NavOutcome::Navigated);
        assert_eq!(nav.visited, vec!["GameSetup".to_string()]);
    }

    #[test]
    fn unregistered_settings_is_ignored() {
        let mut nav = RecordingNavigator::with_routes(&[route::GAME_SETUP]);
        let home = HomeScreen::default();
        assert_eq!(home.press_label("settings", &mut nav).unwrap(), NavOutcome::Ignored);
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn strict_policy_rejects_unregistered_info() {
        let mut nav = RecordingNavigator::with_routes(&[]);
        let home = HomeScreen::new(UnknownScreenPolicy::Reject);
        assert_eq!(
            home.press_label("Info", &mut nav),
            Err(DareError::UnknownScreen("Info".to_string()))
        );
    }

    #[test]
    fn missing_items() {
        let mut nav = RecordingNavigator::with_routes(&[]);
        let home = HomeScreen::default();
        assert_eq!(home.press(4, &mut nav), Err(DareError::NoSuchMenuItem("5".to_string())));
        assert_eq!(
            home.press_label("QUIT", &mut nav),
            Err(DareError::NoSuchMenuItem("QUIT".to_string()))
        );
    }
}
