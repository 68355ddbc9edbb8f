use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "distance_lambda=info,warn";
const VERBOSE_FILTER: &str = "distance_lambda=debug,info";

/// `RUST_LOG` wins over the built-in directives.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable output on stderr so stdout only carries the response body.
pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { QUIET_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// One JSON object per line, with event fields flattened for CloudWatch Insights.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(QUIET_FILTER))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_file(true)
                .with_line_number(true)
                .without_time(),
        )
        .init();
}
