use thiserror::Error;

/// Construction-time failures. Ticks never fail; per-tick anomalies are absorbed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// A lookup table sized against the layer count has the wrong length.
    #[error("{table} has {actual} entries but the layer count is {expected}")]
    ConfigurationMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}
