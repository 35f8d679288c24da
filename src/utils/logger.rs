use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("folio_gen=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio_gen=info"))
    }
}

pub fn init_cli_logger(verbose: bool, json: bool) {
    let registry = tracing_subscriber::registry().with(default_filter(verbose));

    if json {
        // One JSON object per line, for CI log collectors
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
