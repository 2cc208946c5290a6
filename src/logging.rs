use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Sets up the global tracing subscriber. `RUST_LOG` takes precedence over `debug`.
pub fn init(debug: bool) {
    let level = if debug {
        "paperconf=debug"
    } else {
        "paperconf=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(String::from("%H:%M:%S")))
        .with_target(debug)
        .init();
}
