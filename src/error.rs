//! Error types.
//!
//! - `NumericError` is returned by the checked library operations (bitset
//!   access, matrix inversion, curve fitting).
//! - `AppError` is what the binary reports: a message plus the process exit code.

/// Error type for the checked numeric operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// Returned when a bit index falls outside the logical size of a bitset.
    #[error("bit index {bit} is out of range for a bitset of {len} bits")]
    IndexOutOfRange {
        /// Requested bit index.
        bit: usize,
        /// Logical bit count of the bitset.
        len: usize,
    },

    /// Returned when inverting a matrix whose determinant is zero or non-finite.
    #[error("matrix is singular (determinant = {determinant})")]
    SingularMatrix {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },

    /// Returned when the x and y sample sequences differ in length.
    #[error("sample length mismatch: {x} x-values, {y} y-values")]
    LengthMismatch { x: usize, y: usize },

    /// Returned when a fit has fewer samples than parameters.
    #[error("insufficient samples: got {n}, need at least {min}")]
    InsufficientSamples { n: usize, min: usize },

    /// Returned when the samples have fewer distinct x-values than parameters.
    #[error("degenerate input: only {distinct} distinct x-value(s)")]
    DegenerateInput { distinct: usize },

    /// Returned when a sample contains NaN or infinity.
    #[error("sample data contains non-finite values")]
    NonFiniteData,
}

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

impl From<NumericError> for AppError {
    fn from(err: NumericError) -> Self {
        let exit_code = match err {
            NumericError::LengthMismatch { .. } | NumericError::NonFiniteData => 2,
            NumericError::InsufficientSamples { .. } | NumericError::DegenerateInput { .. } => 3,
            NumericError::IndexOutOfRange { .. } | NumericError::SingularMatrix { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
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
