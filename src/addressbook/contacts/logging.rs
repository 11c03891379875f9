use tracing_subscriber::EnvFilter;

use crate::addressbook::contacts::error::{ExportError, Result};

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`
/// (0 = info, 1 = debug, 2+ = trace) for this crate and warnings elsewhere.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(verbosity))
            .map_err(|err| ExportError::Logging(err.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| ExportError::Logging(err.to_string()))
}

fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,addressbook_export={level}")
}
