use crate::oracle::{OracleError, StarParameters};

/// Errors that abort a sweep.
///
/// Non-convergence of a single cell is not an error; it is reported through
/// [`crate::sweep::SweepResults::diagnostics`] instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SweepError {
    /// The oracle rejected a parameter set.
    #[error("oracle failed at {params}: {source}")]
    OracleFailure {
        params: StarParameters,
        #[source]
        source: OracleError,
    },

    /// The oracle returned NaN or an infinite error.
    #[error("oracle returned non-finite error {value} at {params}")]
    NonFiniteError { params: StarParameters, value: f64 },

    /// Invalid sweep or render configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The figure backend failed to draw
    #[error("render failed: {0}")]
    Render(String),

    /// The sweep was cancelled through its progress handle
    #[error("sweep cancelled")]
    Cancelled,
}

impl SweepError {
    /// True for the two oracle-originated variants.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            SweepError::OracleFailure { .. } | SweepError::NonFiniteError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
