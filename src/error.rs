use thiserror::Error;

use crate::domain::ModelKind;

/// Errors raised by the integration engine.
///
/// Unphysical densities are *not* errors: they are clamped to a sentinel by the
/// model function and show up as vanishing integrand contributions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CosmoError {
    #[error("{model} model expects at least {expected} parameters, got {got}")]
    InvalidParameterVector {
        model: ModelKind,
        expected: usize,
        got: usize,
    },

    #[error("quadrature resolution must be >= 1")]
    InvalidResolution,

    #[error("invalid integration span: {0}")]
    InvalidSpan(String),

    #[error("output buffer '{name}' has length {got}, expected {expected}")]
    BufferLength {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Hubble-rate parameter must be > 0, got {0}")]
    NonPositiveHubble(f64),

    #[error("luminosity distance integral is not positive (F={value}) at z={z}")]
    NonPositiveDistance { z: f64, value: f64 },
}

impl CosmoError {
    /// True for failures caused by the caller's inputs rather than the numerics.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CosmoError::InvalidParameterVector { .. }
                | CosmoError::InvalidResolution
                | CosmoError::InvalidSpan(_)
                | CosmoError::BufferLength { .. }
        )
    }
}

/// Binary-level error carrying a process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<CosmoError> for AppError {
    fn from(err: CosmoError) -> Self {
        let code = if err.is_input_error() { 2 } else { 4 };
        AppError::new(code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
