// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter honours `RUST_LOG`; without it, the crate logs at `info` and
//! noisy dependencies (wgpu, naga, cosmic-text) are held at `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,cosmic_text=warn";

/// Builds the filter from the environment, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
