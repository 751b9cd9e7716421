use crate::element::ElementKind;
use crate::error::CompileError;
use crate::formatter;
use crate::validate::validate;
use inventoria_core::format::{ElementDescriptor, ElementType, FormatSpec, OptionSet};
use inventoria_core::{CustomId, GenerationContext};

/// Compiles a format into an executable [`Generator`].
///
/// Runs the validator first; a format that validates always lowers.
/// Compilation is deterministic: equal specs compile to behaviorally
/// identical generators (same output distribution, not identical values).
pub fn compile(spec: &FormatSpec) -> Result<Generator, CompileError> {
    validate(spec)?;
    let elements = spec
        .elements
        .iter()
        .enumerate()
        .map(|(index, descriptor)| CompiledElement::lower(index, descriptor))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Generator { elements })
}

/// An executable identifier format: one compiled element per descriptor,
/// rendered in order and concatenated.
#[derive(Debug, Clone)]
pub struct Generator {
    elements: Vec<CompiledElement>,
}

impl Generator {
    /// Renders one candidate identifier from a fresh generation context.
    ///
    /// Pure apart from the random elements' thread-RNG draws; the candidate
    /// is transient until the orchestrator accepts it.
    pub fn render(&self, ctx: &GenerationContext) -> CustomId {
        let mut out = String::new();
        for element in &self.elements {
            let raw = element.kind.produce(ctx);
            out.push_str(&formatter::apply(
                raw,
                &element.options,
                element.kind.supports_case(),
            ));
        }
        CustomId::new(out)
    }

    /// Renders the deterministic preview string for this format.
    ///
    /// Uses fixed stand-ins for random, sequence, and date elements so the
    /// editor shows a stable example; shares no state with [`render`](Self::render).
    pub fn preview(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            let raw = element.kind.preview_value();
            out.push_str(&formatter::apply(
                raw,
                &element.options,
                element.kind.supports_case(),
            ));
        }
        out
    }
}

#[derive(Debug, Clone)]
struct CompiledElement {
    kind: ElementKind,
    options: OptionSet,
}

impl CompiledElement {
    fn lower(index: usize, descriptor: &ElementDescriptor) -> Result<Self, CompileError> {
        let kind = match descriptor.kind {
            ElementType::FixedText => {
                let value = descriptor
                    .value
                    .clone()
                    .ok_or(CompileError::Internal { index })?;
                ElementKind::FixedText(value)
            }
            ElementType::Random20Bit => ElementKind::Random20Bit,
            ElementType::Random32Bit => ElementKind::Random32Bit,
            ElementType::Random6Digit => ElementKind::Random6Digit,
            ElementType::Random9Digit => ElementKind::Random9Digit,
            ElementType::Guid => ElementKind::Guid,
            ElementType::DateTime => {
                let pattern = descriptor
                    .options
                    .format
                    .ok_or(CompileError::Internal { index })?;
                ElementKind::DateTime(pattern)
            }
            ElementType::Sequence => ElementKind::Sequence,
        };
        Ok(Self {
            kind,
            options: descriptor.options.clone(),
        })
    }
}
