//! Tracing subscriber setup, selected by deployment environment.

use crate::infra::config::Environment;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the per-environment default level.
pub fn init(env: Environment) {
    let default_level = match env {
        Environment::Local | Environment::Dev => "debug",
        Environment::Prod => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // try_init: tests and binaries may both call this.
    let _ = match env {
        Environment::Local => builder.pretty().try_init(),
        Environment::Dev => builder.compact().try_init(),
        Environment::Prod => builder.json().try_init(),
    };
}
