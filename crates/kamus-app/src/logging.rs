use tracing_subscriber::EnvFilter;

/// Human-readable output on a terminal, JSON lines otherwise.
/// `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if atty::is(atty::Stream::Stdout) {
        builder.init();
    } else {
        builder.json().init();
    }
}
