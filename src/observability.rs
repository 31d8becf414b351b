//! This module provides observability and diagnostics for the codec.
//!
//! Library code logs through the `log` facade. This module owns the two ways that
//! output is surfaced:
//! - `log_metric!`, a structured key-value metric emitted at debug level. The
//!   `#[cfg(debug_assertions)]` attribute compiles it out of release builds.
//! - `enable_verbose_logging`, a one-time `env_logger` installation for hosts
//!   (the Python bindings, scripts) that have no logger of their own.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Once;

/// Logs a structured key-value metric string at debug level, only in debug builds.
///
/// # Example
/// ```
/// use htf_int::log_metric;
/// let symbols = 4;
/// log_metric!("event"="encode", "version"="v3", "symbols"=&symbols);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("HTF_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at `Info` level with a `[LEVEL] message` format.
///
/// When `log_file` is given, records are appended to that file instead of
/// stderr. Only the first call has an effect. If another logger is already
/// installed this is a no-op.
pub fn enable_verbose_logging(log_file: Option<String>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => eprintln!("Could not open log file {}: {}", filename, e),
            }
        }

        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    // Installing the logger is process-wide, so it is exercised in
    // `tests/verbose_logging.rs` rather than in the library test binary.

    #[test]
    fn test_log_metric_accepts_mixed_values() {
        let symbols = 4usize;
        log_metric!("event" = "test", "count" = 1, "symbols" = &symbols);
    }
}
