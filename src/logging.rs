use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps the number of `-v` flags to a filter for this crate.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "shortest_paths=warn",
        1 => "shortest_paths=info",
        2 => "shortest_paths=debug",
        _ => "shortest_paths=trace",
    }
}

/// Installs a stderr subscriber for the binaries. `RUST_LOG` takes precedence
/// over the verbosity.
pub fn init_logging(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
