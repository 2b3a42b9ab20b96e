use crate::{config::Config, Result};

/// Initialize logging/tracing.
///
/// Without the `tracing` feature this is a no-op, but the signature stays the
/// same so binaries do not need their own `cfg`s.
pub fn init(service_name: &str, config: &Config) -> Result<()> {
    let _ = (service_name, config);

    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // `RUST_LOG` wins over `OUTCOME_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{},{service_name}=info", config.log_filter))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| crate::Error::Config(format!("logging already initialized: {e}")))?;
    }

    Ok(())
}
