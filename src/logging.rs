// src/logging.rs
//! Tracing setup for drivers embedding the engines.
//!
//! The engines only emit `tracing` events. A driver calls [`init_from_env`]
//! once at startup to print them.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::FormatTime;

/// Filter directives, in `EnvFilter` syntax (e.g. `shroud_rules=trace`).
pub const LOG_ENV: &str = "SHROUD_LOG";

/// `compact` (default) or `full` (timestamps).
pub const LOG_STYLE_ENV: &str = "SHROUD_LOG_STYLE";

/// A timer that outputs nothing but still enables span timing calculation
struct NoTimestamp;

impl FormatTime for NoTimestamp {
    fn format_time(
        &self,
        _w: &mut tracing_subscriber::fmt::format::Writer<'_>,
    ) -> std::fmt::Result {
        Ok(())
    }
}

/// Install a stderr subscriber when `SHROUD_LOG` is set.
///
/// Returns `true` if a subscriber was installed by this call; `false` when
/// logging is not requested or a global subscriber already exists.
pub fn init_from_env() -> bool {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return false;
    };

    let style = std::env::var(LOG_STYLE_ENV).unwrap_or_default();
    let installed = if style == "full" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_timer(NoTimestamp)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    };
    if installed {
        tracing::debug!("tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_never_installs() {
        let _ = init_from_env();
        assert!(!init_from_env());
    }
}
