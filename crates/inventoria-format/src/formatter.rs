use crate::element::RawValue;
use inventoria_core::format::{CaseTransform, OptionSet};

/// Applies per-element post-processing to a raw value.
///
/// Order: stringify, then left-pad numbers with '0' to `min_digits` when
/// `leading_zeros` is set, then apply the case transform when the element
/// kind supports it. Never truncates: values wider than `min_digits` come
/// out at full width.
pub(crate) fn apply(raw: RawValue, options: &OptionSet, case_applies: bool) -> String {
    let (mut out, numeric) = match raw {
        RawValue::Text(text) => (text, false),
        RawValue::Number(n) => (n.to_string(), true),
    };

    if numeric && options.leading_zeros {
        if let Some(min_digits) = options.min_digits {
            let width = usize::from(min_digits);
            if out.len() < width {
                out = format!("{out:0>width$}");
            }
        }
    }

    if case_applies {
        match options.case {
            CaseTransform::None => {}
            CaseTransform::Upper => out = out.to_uppercase(),
            CaseTransform::Lower => out = out.to_lowercase(),
        }
    }

    out
}
