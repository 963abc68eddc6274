use thiserror::Error;

/// Failures reported by the simulation engine.
///
/// Numerical blow-up is deliberately absent: an unstable parameter choice shows
/// up as large or NaN samples in the returned fields, never as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RippleError {
    /// Rejected parameters (grid too small, non-positive CFL fraction, ...).
    /// The simulation is not started.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A stepping operation was requested before `initialize`.
    #[error("Simulation has not been initialized.")]
    NotInitialized,

    /// An operator or derivative broke its shape contract. Not recoverable.
    #[error("Internal contract violation: {0}")]
    Implementation(String),
}

pub type Result<T> = std::result::Result<T, RippleError>;
