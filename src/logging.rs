//! Feature-gated logging macros.
//!
//! With the `logging` feature these forward to `tracing`; without it they
//! expand to nothing, so the library carries no tracing dependency and no
//! runtime cost. Consumers install their own subscriber.
//!
//! ```rust,ignore
//! use crate::logging::{debug, trace};
//!
//! trace!(key = K::NAME, physical_key = %physical, "get");
//! debug!(key = K::NAME, "key absent");
//! ```

/// Per-call detail: every base storage access.
#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// Outcomes worth seeing while debugging: absent keys, wrapped failures.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Rejected writes that the caller will see as errors.
#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub(crate) use log_debug as debug;
pub(crate) use log_trace as trace;
pub(crate) use log_warn as warn;
