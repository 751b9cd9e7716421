use inventoria_core::format::{MAX_ELEMENTS, MAX_FIXED_TEXT_LEN, MIN_ELEMENTS};
use thiserror::Error;

/// Rejections produced by the descriptor validator.
///
/// All of these mean the caller supplied a malformed format; none of them
/// can occur once a format has been accepted and persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("format must have {MIN_ELEMENTS}..={MAX_ELEMENTS} elements, got {got}")]
    ElementCount { got: usize },
    #[error("element {index}: FixedText requires a value")]
    MissingValue { index: usize },
    #[error("element {index}: fixed text must be at most {MAX_FIXED_TEXT_LEN} bytes, got {got}")]
    ValueTooLong { index: usize, got: usize },
    #[error("element {index}: leadingZeros requires minDigits")]
    MissingMinDigits { index: usize },
    #[error("element {index}: minDigits must be within 1..=10, got {got}")]
    MinDigitsOutOfRange { index: usize, got: u8 },
    #[error("element {index}: DateTime requires a format pattern")]
    MissingDateTimeFormat { index: usize },
}

/// Errors from lowering a format into an executable generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("invalid format: {0}")]
    Invalid(#[from] ValidationError),
    /// A descriptor passed validation but could not be lowered. Indicates
    /// a bug in the validator, not bad caller input.
    #[error("element {index}: descriptor passed validation but failed to lower")]
    Internal { index: usize },
}
