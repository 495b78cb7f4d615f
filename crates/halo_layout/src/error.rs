//! Layout error types

use thiserror::Error;

/// Invalid viewport dimensions or breakpoint configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// Width is NaN or infinite
    #[error("viewport width must be finite, got {0}")]
    NonFinite(f32),

    /// Width is below zero
    #[error("viewport width must not be negative, got {0}")]
    Negative(f32),

    /// Breakpoints must be finite, positive, and strictly increasing
    #[error("invalid breakpoints: tablet={tablet}, tv={tv}")]
    InvalidBreakpoints { tablet: f32, tv: f32 },
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, DimensionError>;
