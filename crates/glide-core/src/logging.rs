#![forbid(unsafe_code)]

//! Structured logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so call sites can log without naming the dependency directly; the
//! crate root re-exports them again for downstream ergonomics. Without the
//! feature every call site compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted `tracing` subscriber honoring `RUST_LOG`.
///
/// Intended for production hosts that want machine-readable logs; calling it
/// twice is harmless (the second install attempt is discarded).
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
