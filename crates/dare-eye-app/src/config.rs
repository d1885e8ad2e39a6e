use std::path::Path;

use serde::Deserialize;

use dare_eye_core::capability::{UnknownScreenPolicy, route};
use dare_eye_core::error::DareError;
use dare_eye_core::results_text::SHARE_HEADER;
use dare_eye_core::wish::{DEFAULT_WISHES, WishCatalog};

use crate::error::AppError;

pub const CONFIG_FILE: &str = "dare-eye.toml";

/// Top-level configuration, loaded from `dare-eye.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Screens the host can show. `Home` is the start screen.
    pub routes: Vec<String>,
    /// Treat navigation to an unregistered screen as an error.
    pub strict_navigation: bool,
    /// Fixed seed for the wish box.
    pub seed: Option<u64>,
    /// Open straight onto the results for this scores file.
    pub scores_path: Option<String>,
    pub share: ShareConfig,
    pub wishes: WishesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            routes: vec![
                route::HOME.to_string(),
                route::GAME_SETUP.to_string(),
                route::GAME_RULES.to_string(),
                route::GAME_RESULTS.to_string(),
            ],
            strict_navigation: false,
            seed: None,
            scores_path: None,
            share: ShareConfig::default(),
            wishes: WishesConfig::default(),
        }
    }
}

/// Where shared results go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareTarget {
    Stdout,
    File(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub target: ShareTarget,
    pub header: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            target: ShareTarget::Stdout,
            header: SHARE_HEADER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WishesConfig {
    pub catalog: Vec<String>,
}

impl Default for WishesConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_WISHES.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn navigation_policy(&self) -> UnknownScreenPolicy {
        if self.strict_navigation {
            UnknownScreenPolicy::Reject
        } else {
            UnknownScreenPolicy::Warn
        }
    }

    pub fn wish_catalog(&self) -> Result<WishCatalog, AppError> {
        Ok(WishCatalog::new(self.wishes.catalog.clone())?)
    }

    /// Check the config before the session starts.
    pub fn validate(&self) -> Result<(), AppError> {
        if WishCatalog::new(self.wishes.catalog.clone()).is_err() {
            tracing::error!("wishes.catalog has no usable entries");
            return Err(AppError::Core(DareError::InvalidCatalog));
        }
        if !self.routes.iter().any(|r| r == route::HOME) {
            return Err(AppError::Config(format!(
                "routes must include the start screen `{}`",
                route::HOME
            )));
        }
        if !self.routes.iter().any(|r| r == route::GAME_RESULTS) {
            tracing::warn!("routes has no `{}`, games cannot show results", route::GAME_RESULTS);
        }
        if self.share.header.trim().is_empty() {
            tracing::warn!("share.header is empty, shared results will start with a blank line");
        }
        Ok(())
    }

    /// Load config from `dare-eye.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = Self::read(Path::new(CONFIG_FILE));
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Read and parse `path`. A missing file is normal; other read errors are warned about.
    fn read(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No {} found, using defaults", path.display());
                Self::default()
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            },
        }
    }

    fn from_toml(content: &str) -> Self {
        match toml::from_str::<AppConfig>(content) {
            Ok(cfg) => {
                tracing::info!("Loaded configuration from {CONFIG_FILE}");
                cfg
            },
            Err(e) => {
                tracing::warn!("Failed to parse {CONFIG_FILE}: {e}, using defaults");
                Self::default()
            },
        }
    }

    /// Apply `DARE_EYE_*` overrides read through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("DARE_EYE_SCORES")
            && !path.is_empty()
        {
            self.scores_path = Some(path);
        }
        if let Some(val) = var("DARE_EYE_SEED") {
            match val.parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!(value = %val, "DARE_EYE_SEED is not a number, ignoring"),
            }
        }
        if let Some(val) = var("DARE_EYE_STRICT_NAV")
            && let Ok(strict) = val.parse::<bool>()
        {
            self.strict_navigation = strict;
        }
        if let Some(path) = var("DARE_EYE_SHARE_FILE")
            && !path.is_empty()
        {
            self.share.target = ShareTarget::File(path);
        }
    }
}
