//! Error types for the compressor model.

use cm_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a compressor map model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompressorError {
    /// A map coefficient sequence does not have exactly ten entries.
    #[error("invalid {which} map: expected {expected} coefficients, got {len}")]
    InvalidMapShape {
        which: &'static str,
        expected: usize,
        len: usize,
    },

    /// A spec parameter is outside its valid range.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The operating point is physically inconsistent
    /// (condensing below evaporating, or negative superheat).
    #[error("Physically inconsistent operating point: {what}")]
    PhysicalOrdering { what: &'static str },

    /// A map evaluated to a value that makes a downstream ratio undefined;
    /// detected as a non-finite result after the correction sequence.
    #[error("Degenerate map: non-finite {what}")]
    DegenerateMap { what: &'static str },

    /// Property evaluator failure, propagated verbatim.
    #[error(transparent)]
    Property(#[from] FluidError),
}

pub type CompressorResult<T> = Result<T, CompressorError>;
