use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Failures produced by the transform entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Factor must be non-negative, got {factor}")]
    InvalidFactor { factor: i64 },

    #[error("Unsupported type: {kind}. Supported types: integer, float, text")]
    UnsupportedType { kind: &'static str },

    #[error("Values must be a list, got {kind}")]
    InvalidArgument { kind: &'static str },

    #[error("Overflow: {detail}")]
    Overflow { detail: String },
}

impl TransformError {
    pub fn overflow(detail: impl Into<String>) -> Self {
        Self::Overflow {
            detail: detail.into(),
        }
    }

    /// Stable name reported in `SafeResult` error descriptors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidFactor { .. } => "InvalidFactor",
            Self::UnsupportedType { .. } => "UnsupportedType",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::Overflow { .. } => "Overflow",
        }
    }

    /// Whether callers are expected to handle this failure as part of normal input validation
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidFactor { .. } | Self::UnsupportedType { .. }
        )
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidFactor { .. } => ErrorCode::INVALID_FACTOR,
            Self::UnsupportedType { .. } => ErrorCode::UNSUPPORTED_TYPE,
            Self::InvalidArgument { .. } => ErrorCode::INVALID_ARGUMENT,
            Self::Overflow { .. } => ErrorCode::OVERFLOW,
        }
    }

    /// Get exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidFactor { .. }
            | Self::UnsupportedType { .. }
            | Self::InvalidArgument { .. } => 2,
            Self::Overflow { .. } => 1,
        }
    }
}
