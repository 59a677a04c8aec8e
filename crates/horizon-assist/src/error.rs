//! Error types for the adapter.
//!
//! These are internal to session establishment: the public
//! [`crate::AtspiAdapter`] never surfaces them. Accessibility must never
//! take the host application down, so every failure path degrades to an
//! inert adapter after a `tracing` diagnostic.

use thiserror::Error;

/// Errors that can occur while establishing the accessibility session.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The general-purpose session bus could not be reached.
    #[error("session bus unavailable: {0}")]
    SessionBus(String),

    /// The accessibility bus broker did not answer within the deadline.
    #[error("accessibility bus broker did not answer within the deadline")]
    BrokerTimeout,

    /// The broker answered with an empty accessibility bus address.
    #[error("accessibility bus broker returned an empty address")]
    EmptyAddress,

    /// A bus-level protocol or transport error.
    #[cfg(target_os = "linux")]
    #[error("bus error: {0}")]
    Bus(#[from] zbus::Error),
}

/// Result type for session operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
