use std::fmt;

/// Compile-time rejection of an invalid condition or aggregation shape.
///
/// Every variant is a structural error in the input — fatal, synchronous and
/// never retryable. Engine-side rejections are the transport layer's concern
/// and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    InvalidLeafKind(String),
    InvalidRangeOperator(String),
    MalformedAggregation(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidLeafKind(msg) => write!(f, "invalid leaf kind: {msg}"),
            CompileError::InvalidRangeOperator(msg) => {
                write!(f, "invalid range operator: {msg}")
            }
            CompileError::MalformedAggregation(msg) => {
                write!(f, "malformed aggregation: {msg}")
            }
        }
    }
}

impl std::error::Error for CompileError {}
