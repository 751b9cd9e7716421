use inventoria_core::format::DateTimePattern;
use inventoria_core::GenerationContext;
use jiff::tz::TimeZone;
use rand::Rng;
use uuid::Uuid;

/// Output of one element's producer, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawValue {
    Text(String),
    Number(u64),
}

/// A descriptor lowered to its value producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ElementKind {
    FixedText(String),
    Random20Bit,
    Random32Bit,
    Random6Digit,
    Random9Digit,
    Guid,
    DateTime(DateTimePattern),
    Sequence,
}

impl ElementKind {
    /// Whether the case transform option applies to this element's output.
    pub(crate) fn supports_case(&self) -> bool {
        matches!(self, Self::FixedText(_) | Self::Guid)
    }

    /// Produces the element's raw value for one generation attempt.
    ///
    /// Synchronous, in-memory only. Random elements draw from the thread
    /// RNG; uniformity matters for collision-rate reasoning, not for
    /// cryptographic strength.
    pub(crate) fn produce(&self, ctx: &GenerationContext) -> RawValue {
        match self {
            Self::FixedText(value) => RawValue::Text(value.clone()),
            Self::Random20Bit => RawValue::Number(rand::rng().random_range(0..1u64 << 20)),
            Self::Random32Bit => RawValue::Number(u64::from(rand::rng().random::<u32>())),
            Self::Random6Digit => RawValue::Number(rand::rng().random_range(0..1_000_000)),
            Self::Random9Digit => RawValue::Number(rand::rng().random_range(0..1_000_000_000)),
            Self::Guid => RawValue::Text(Uuid::new_v4().to_string()),
            Self::DateTime(pattern) => RawValue::Text(render_datetime(ctx, *pattern)),
            // One more than the live item count at snapshot time. Not a
            // persisted auto-increment; the orchestrator re-snapshots the
            // count on every attempt.
            Self::Sequence => RawValue::Number(ctx.current_sequence_count + 1),
        }
    }

    /// Fixed stand-in used by the preview path.
    ///
    /// Presentation-only constants; repeated previews of one format must be
    /// byte-identical, and this path must never share entropy, clock, or
    /// sequence state with [`produce`](Self::produce).
    pub(crate) fn preview_value(&self) -> RawValue {
        match self {
            Self::FixedText(value) => RawValue::Text(value.clone()),
            Self::Random20Bit => RawValue::Number(524_287),
            Self::Random32Bit => RawValue::Number(305_419_896),
            Self::Random6Digit => RawValue::Number(123_456),
            Self::Random9Digit => RawValue::Number(123_456_789),
            Self::Guid => RawValue::Text("9f8b7c6d-1a2b-4c3d-8e4f-5a6b7c8d9e0f".to_string()),
            Self::DateTime(pattern) => {
                let ts = jiff::Timestamp::from_second(PREVIEW_EPOCH_SECOND)
                    .expect("preview timestamp is a valid instant");
                RawValue::Text(format_timestamp(ts, *pattern))
            }
            Self::Sequence => RawValue::Number(1),
        }
    }
}

/// 2024-01-15T00:00:00Z, the instant preview DateTime elements render from.
const PREVIEW_EPOCH_SECOND: i64 = 1_705_276_800;

fn render_datetime(ctx: &GenerationContext, pattern: DateTimePattern) -> String {
    format_timestamp(ctx.now, pattern)
}

fn format_timestamp(ts: jiff::Timestamp, pattern: DateTimePattern) -> String {
    // Patterns are calendar-based, so render in UTC rather than from the
    // raw instant.
    ts.to_zoned(TimeZone::UTC)
        .strftime(pattern.strftime())
        .to_string()
}
