use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the terminal log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "break_even_calc=debug,warn"
    } else {
        "break_even_calc=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
