use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` wins over `verbosity` when set.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default = match verbosity {
        0 => "senses_score=warn",
        1 => "senses_score=info",
        _ => "senses_score=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
