use std::path::Path;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging, plus rolling JSON file logging when a log
/// directory is configured.
pub fn init_logging(log_dir: Option<&Path>) {
    // Respect RUST_LOG if set; otherwise default to verbose for our crate.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("marquee_scraper=debug,info"));

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    match log_dir {
        Some(dir) => {
            let _ = std::fs::create_dir_all(dir);
            let file_appender = tracing_appender::rolling::daily(dir, "marquee.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            // The guard must outlive the process so logs flush on exit.
            std::mem::forget(guard);
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
        }
    }
}
