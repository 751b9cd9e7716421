use crate::compile::compile;
use crate::error::CompileError;
use inventoria_core::FormatSpec;

/// Renders a representative, non-persisted example identifier for a format.
///
/// Consumed by the format editor: random, sequence, and date elements use
/// fixed deterministic stand-ins, so repeated renders of the same spec show
/// the same preview. This path never draws from the RNG, reads the clock,
/// or touches sequence state used by real generation, and its output must
/// never be persisted.
pub fn preview(spec: &FormatSpec) -> Result<String, CompileError> {
    Ok(compile(spec)?.preview())
}
