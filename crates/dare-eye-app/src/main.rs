use tracing_subscriber::EnvFilter;

use dare_eye::CliArgs;
use dare_eye::config::AppConfig;

fn main() {
    // stdout carries the screens, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load();
    CliArgs::parse(std::env::args().skip(1)).apply(&mut config);

    if let Err(e) = dare_eye::run(&config) {
        tracing::error!("{e}");
        eprintln!("dare-eye: {e}");
        std::process::exit(1);
    }
}
