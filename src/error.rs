use thiserror::Error;

/// Errors reported by sketch construction, merging and deserialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    #[error("register count {requested} should be in range [{min}, {max}]")]
    InvalidRegisterCount {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("precision {precision} should be in range [{min}, {max}]")]
    InvalidPrecision { precision: u32, min: u32, max: u32 },
    #[error("number of bias neighbors must be positive, got {0}")]
    InvalidNeighbors(usize),
    #[error("incompatible sketches: expected {expected}, found {found}")]
    IncompatibleSketches { expected: String, found: String },
    #[error("invalid sketch state: {0}")]
    InvalidState(String),
}

impl SketchError {
    /// Whether the error comes from an invalid construction parameter,
    /// as opposed to mismatched merge operands or corrupted state.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SketchError::InvalidRegisterCount { .. }
                | SketchError::InvalidPrecision { .. }
                | SketchError::InvalidNeighbors(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SketchError>;
