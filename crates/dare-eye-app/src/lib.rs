pub mod config;
pub mod error;
pub mod nav;
pub mod scores_file;
pub mod share;
pub mod shell;

use std::path::Path;

use dare_eye_core::wish::{RandomSource, SeededRandom};

use config::AppConfig;
use error::AppError;
use shell::Shell;

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub scores_path: Option<String>,
    pub seed: Option<u64>,
    pub strict: bool,
}

impl CliArgs {
    /// Parse `--scores=<path>`, `--seed=<n>` and `--strict`. Unknown flags are logged and skipped.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut cli = Self::default();
        for arg in args {
            if let Some(path) = arg.strip_prefix("--scores=") {
                cli.scores_path = Some(path.to_string());
            } else if let Some(seed) = arg.strip_prefix("--seed=") {
                match seed.parse::<u64>() {
                    Ok(n) => cli.seed = Some(n),
                    Err(_) => tracing::warn!(value = seed, "--seed is not a number, ignoring"),
                }
            } else if arg == "--strict" {
                cli.strict = true;
            } else {
                tracing::warn!(arg = %arg, "unknown argument, ignoring");
            }
        }
        cli
    }

    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.scores_path {
            config.scores_path = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.strict {
            config.strict_navigation = true;
        }
    }
}

/// Random source for a session: seeded when configured, OS entropy otherwise.
pub fn random_source(config: &AppConfig) -> Box<dyn RandomSource> {
    match config.seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(SeededRandom::from_entropy()),
    }
}

/// Validate the config and run one interactive session over stdin/stdout.
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    config.validate()?;
    let share = share::share_sink(&config.share);
    let stdout = std::io::stdout();
    let mut shell = Shell::new(config, share, random_source(config), stdout.lock())?;
    if let Some(path) = &config.scores_path {
        let scores = scores_file::load_scores(Path::new(path))?;
        shell.open_results(&scores)?;
    }
    let stdin = std::io::stdin();
    shell.run(stdin.lock())
}
