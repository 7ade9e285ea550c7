//! Error types.
//!
//! Every failure at the display boundary is fatal: it travels up to the
//! dispatcher, which shuts the actors down and releases the surface.

use std::io;
use thiserror::Error;

/// The display backend could not be reached or initialized.
#[derive(Debug, Error)]
#[error("failed to initialize display surface")]
pub struct ConnectionError(#[source] pub io::Error);

/// Polling the surface for events failed.
#[derive(Debug, Error)]
#[error("failed to poll surface events")]
pub struct EventPollError(#[source] pub io::Error);

/// Issuing a draw call failed.
#[derive(Debug, Error)]
#[error("draw call failed")]
pub struct DrawError(#[source] pub io::Error);

/// Configuration rejected by [`Config::validate`](crate::Config::validate).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// At least one rectangle is required.
    #[error("rectangle count must be at least 1")]
    NoRectangles,

    /// The surface cannot hold the largest rectangle plus a step each way.
    #[error("surface {width}x{height} is too small, need at least {min}x{min}")]
    SurfaceTooSmall {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
        /// Minimum side length.
        min: u16,
    },
}

/// Top-level error for a run.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ConnectionError`].
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// See [`EventPollError`].
    #[error(transparent)]
    EventPoll(#[from] EventPollError),

    /// See [`DrawError`].
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The OS refused to start an actor thread.
    #[error("failed to spawn {role} thread")]
    Spawn {
        /// Which actor was being started.
        role: &'static str,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

/// Result type for bouncebox operations.
pub type Result<T> = std::result::Result<T, Error>;
