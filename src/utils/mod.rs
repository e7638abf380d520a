pub mod persistence;

use std::sync::Once;

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "warn,expense_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(spec.as_deref());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// `RUST_LOG` wins when set; otherwise the crate logs at info and everything else at warn.
fn env_filter(spec: Option<&str>) -> EnvFilter {
    match spec.map(str::trim).filter(|spec| !spec.is_empty()) {
        Some(spec) => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(spec),
        None => EnvFilter::new(DEFAULT_DIRECTIVES),
    }
}
