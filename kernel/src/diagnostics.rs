//! Opt-in tracing for the kernel binaries.
//!
//! Off by default. Set `CPUBENCH_TRACE` to `1`/`true`/`on` for the default
//! filter, or to an `EnvFilter` expression (e.g. `cpubench_kernel=trace`).
//! Output goes to stderr only; stdout carries nothing but the kernel's
//! result line, whatever the setting.

use std::sync::Once;

/// Environment variable that enables diagnostics.
pub const TRACE_ENV: &str = "CPUBENCH_TRACE";

const DEFAULT_TRACE_FILTER: &str = "cpubench_kernel=debug";

static TRACE_INIT: Once = Once::new();

/// Install the stderr subscriber if [`TRACE_ENV`] asks for it.
pub fn init() {
    let Ok(raw) = std::env::var(TRACE_ENV) else {
        return;
    };
    if !toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::fmt;
        use tracing_subscriber::EnvFilter;

        let filter = filter_expr_from(&raw)
            .and_then(|expr| EnvFilter::try_new(expr).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_FILTER));

        let _ = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init();
    });
}

fn toggle_enabled(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    )
}

/// A filter expression, or `None` when the value is a plain on-switch.
fn filter_expr_from(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => None,
        _ => Some(trimmed),
    }
}
