use dare_eye_core::capability::{Navigator, route};

/// Screen stack rooted at `Home`.
#[derive(Debug, Clone)]
pub struct StackNavigator {
    routes: Vec<String>,
    stack: Vec<String>,
}

impl StackNavigator {
    pub fn new(routes: &[String]) -> Self {
        Self {
            routes: routes.to_vec(),
            stack: vec![route::HOME.to_string()],
        }
    }

    pub fn current(&self) -> &str {
        self.stack.last().map(String::as_str).unwrap_or(route::HOME)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Navigator for StackNavigator {
    fn is_registered(&self, screen: &str) -> bool {
        self.routes.iter().any(|r| r == screen)
    }

    fn navigate_to(&mut self, screen: &str) {
        tracing::debug!(from = self.current(), to = screen, "navigate");
        self.stack.push(screen.to_string());
    }

    fn return_to_start(&mut self) {
        self.stack.truncate(1);
    }
}
