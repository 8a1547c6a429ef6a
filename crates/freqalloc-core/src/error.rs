//! Error types for the frequency allocation encoder

use thiserror::Error;

use crate::model::{ConstraintKind, Frequency};

/// Main error type for encoder operations
#[derive(Debug, Error)]
pub enum FreqAllocError {
    /// The input model cannot be encoded
    #[error("Invalid model: {0}")]
    InvalidModel(#[from] ModelError),

    /// Creating or writing the destination failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The model file is not valid JSON for the expected layout
    #[cfg(feature = "serde")]
    #[error("Model parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a model is rejected before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("station {station} has negative spacing delta {delta}")]
    NegativeDelta { station: usize, delta: Frequency },

    #[error("interference {index} has negative minimum gap {gap}")]
    NegativeGap { index: usize, gap: Frequency },

    #[error("{kind} {index} references station {station}, but the model has {station_count} stations")]
    UnknownStation {
        kind: ConstraintKind,
        index: usize,
        station: usize,
        station_count: usize,
    },

    #[error("{kind} {index} links station {station} to itself")]
    SelfConstraint {
        kind: ConstraintKind,
        index: usize,
        station: usize,
    },

    /// No transmitter/receiver pair of the station is `delta` apart.
    #[error(
        "station {station} has an empty domain: no pair among {transmitters} transmitter and {receivers} receiver frequencies is {delta} apart"
    )]
    EmptyDomain {
        station: usize,
        delta: Frequency,
        transmitters: usize,
        receivers: usize,
    },
}

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, FreqAllocError>;
