use crate::error::ValidationError;
use inventoria_core::format::{
    ElementDescriptor, ElementType, FormatSpec, MAX_ELEMENTS, MAX_FIXED_TEXT_LEN, MIN_DIGITS_RANGE,
    MIN_ELEMENTS,
};

/// Validates a whole format: element count plus every descriptor.
///
/// Pure; performs no I/O. Options that a kind cannot use (e.g. `case` on a
/// numeric element) are not rejected here because the formatter treats
/// them as no-ops.
pub fn validate(spec: &FormatSpec) -> Result<(), ValidationError> {
    let count = spec.elements.len();
    if !(MIN_ELEMENTS..=MAX_ELEMENTS).contains(&count) {
        return Err(ValidationError::ElementCount { got: count });
    }
    for (index, descriptor) in spec.elements.iter().enumerate() {
        validate_descriptor(index, descriptor)?;
    }
    Ok(())
}

/// Validates one element descriptor at the given position.
pub fn validate_descriptor(
    index: usize,
    descriptor: &ElementDescriptor,
) -> Result<(), ValidationError> {
    match descriptor.kind {
        ElementType::FixedText => {
            let value = descriptor
                .value
                .as_deref()
                .ok_or(ValidationError::MissingValue { index })?;
            if value.len() > MAX_FIXED_TEXT_LEN {
                return Err(ValidationError::ValueTooLong {
                    index,
                    got: value.len(),
                });
            }
        }
        ElementType::DateTime => {
            if descriptor.options.format.is_none() {
                return Err(ValidationError::MissingDateTimeFormat { index });
            }
        }
        _ => {}
    }

    if descriptor.kind.is_numeric() {
        if descriptor.options.leading_zeros && descriptor.options.min_digits.is_none() {
            return Err(ValidationError::MissingMinDigits { index });
        }
    }
    if let Some(min_digits) = descriptor.options.min_digits {
        if !MIN_DIGITS_RANGE.contains(&min_digits) {
            return Err(ValidationError::MinDigitsOutOfRange {
                index,
                got: min_digits,
            });
        }
    }

    Ok(())
}
