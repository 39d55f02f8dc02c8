//! Error handling for Pelagos
//!
//! The synthesis core has exactly one failure mode: invalid generation
//! parameters. Degenerate random draws inside the stochastic layers are
//! clamped to the nearest valid value, never surfaced. The remaining
//! variants belong to the export shell around the engine.

use thiserror::Error;

/// Result type alias for Pelagos operations
pub type Result<T> = std::result::Result<T, PelagosError>;

/// Main error type for Pelagos operations
#[derive(Error, Debug)]
pub enum PelagosError {
    /// Non-positive sample rate or duration. Raised before any buffer
    /// allocation; no partial output exists when this is returned.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// WAV export failed (collaborator shell only, never the core).
    #[error("Export failed: {reason}")]
    Export { reason: String },

    /// I/O error from the export shell.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse error.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PelagosError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            PelagosError::InvalidParameter { .. } => "INVALID_PARAMETER",
            PelagosError::Export { .. } => "EXPORT_FAILED",
            PelagosError::Io(_) => "IO_ERROR",
            PelagosError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<hound::Error> for PelagosError {
    fn from(err: hound::Error) -> Self {
        PelagosError::Export {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PelagosError::InvalidParameter {
            name: "duration_seconds",
            value: -1.0,
        };
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(err.to_string().contains("duration_seconds"));
    }
}
