use serde::{Deserialize, Serialize};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Minimum number of elements in a format.
pub const MIN_ELEMENTS: usize = 1;
/// Maximum number of elements in a format.
pub const MAX_ELEMENTS: usize = 10;
/// Maximum byte length of a FixedText element's value.
pub const MAX_FIXED_TEXT_LEN: usize = 255;
/// Inclusive bounds for the `minDigits` padding option.
pub const MIN_DIGITS_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// The declarative, ordered list of elements describing how an inventory
/// builds its custom item identifiers.
///
/// Owned by an inventory and persisted as part of its settings. The wire
/// schema is `{"elements": [{"type": "...", "value"?: ..., "options"?: {...}}]}`
/// and must stay in byte-for-byte agreement with the format editor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatSpec {
    pub elements: Vec<ElementDescriptor>,
}

impl FormatSpec {
    pub fn new(elements: Vec<ElementDescriptor>) -> Self {
        Self { elements }
    }

    /// Parses a format from its persisted JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the format to its persisted JSON representation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Content hash of the format, used to address compiled generators.
    ///
    /// Process-local only; stability across builds is not required.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// One positional element of a [`FormatSpec`].
///
/// Identity is positional: descriptor order defines concatenation order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementDescriptor {
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// Configured text, present for FixedText elements only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "OptionSet::is_empty")]
    pub options: OptionSet,
}

impl ElementDescriptor {
    /// Creates a descriptor of the given kind with no value and no options.
    pub fn new(kind: ElementType) -> Self {
        Self {
            kind,
            value: None,
            options: OptionSet::default(),
        }
    }

    /// Creates a FixedText descriptor with the given value.
    pub fn fixed_text(value: impl Into<String>) -> Self {
        Self {
            kind: ElementType::FixedText,
            value: Some(value.into()),
            options: OptionSet::default(),
        }
    }

    /// Replaces the descriptor's options.
    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }
}

/// The closed set of element kinds a format may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    FixedText,
    Random20Bit,
    Random32Bit,
    Random6Digit,
    Random9Digit,
    Guid,
    DateTime,
    Sequence,
}

impl ElementType {
    /// Whether the element produces a number and is eligible for
    /// leading-zero padding.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Random20Bit
                | Self::Random32Bit
                | Self::Random6Digit
                | Self::Random9Digit
                | Self::Sequence
        )
    }

    /// Whether the case transform option applies to this kind.
    /// Case is a no-op for numeric and date elements.
    pub fn supports_case(self) -> bool {
        matches!(self, Self::FixedText | Self::Guid)
    }
}

/// Per-element post-processing options. Which fields are meaningful
/// depends on the element kind; irrelevant fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    #[serde(default, skip_serializing_if = "is_false")]
    pub leading_zeros: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_digits: Option<u8>,
    #[serde(default, skip_serializing_if = "CaseTransform::is_identity")]
    pub case: CaseTransform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DateTimePattern>,
}

impl OptionSet {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Case transform applied to FixedText and Guid output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    #[default]
    None,
    Upper,
    Lower,
}

impl CaseTransform {
    fn is_identity(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The recognized set of DateTime element patterns.
///
/// Wire names are the literal pattern strings the editor shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateTimePattern {
    #[serde(rename = "YYYYMMDD")]
    YearMonthDay,
    #[serde(rename = "YYMMDD")]
    ShortYearMonthDay,
    #[serde(rename = "YYYYMMDDHHMMSS")]
    YearMonthDayHourMinuteSecond,
    #[serde(rename = "HHMMSS")]
    HourMinuteSecond,
    #[serde(rename = "HHMM")]
    HourMinute,
}

impl DateTimePattern {
    /// The strftime conversion string this pattern renders with.
    pub fn strftime(self) -> &'static str {
        match self {
            Self::YearMonthDay => "%Y%m%d",
            Self::ShortYearMonthDay => "%y%m%d",
            Self::YearMonthDayHourMinuteSecond => "%Y%m%d%H%M%S",
            Self::HourMinuteSecond => "%H%M%S",
            Self::HourMinute => "%H%M",
        }
    }
}
