//! # Noise Error Types
//!
//! All errors that can occur while setting up noise. Sampling itself
//! never fails.

use thiserror::Error;

/// Errors that can occur when constructing or configuring noise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// Permutation table masking requires a power-of-two size.
    #[error("permutation table size must be a power of two no larger than 2^30, got {0}")]
    TableSizeNotPowerOfTwo(usize),

    /// A fractal needs at least one octave.
    #[error("fractal noise needs at least one octave")]
    NoOctaves,

    /// Octave count above [`crate::MAX_OCTAVES`].
    #[error("fractal noise supports at most {max} octaves, got {0}", max = crate::MAX_OCTAVES)]
    TooManyOctaves(usize),

    /// A fractal needs at least one sampler.
    #[error("fractal noise needs at least one sampler")]
    NoSamplers,

    /// Invalid configuration value or file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for noise setup operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
