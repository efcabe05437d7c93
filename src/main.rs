use anyhow::Result;
use habt::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // The message macros route through tracing only in debug mode; the
    // subscriber is installed under the same condition.
    if std::env::var("HABT_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
