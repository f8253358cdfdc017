use romheb_core::romanized::{HebrewTable, Segment};
use romheb_core::OutputFormat;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RomhebError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum HebOutputFormat {
    Unicode,
    Html,
}

impl From<HebOutputFormat> for OutputFormat {
    fn from(format: HebOutputFormat) -> Self {
        match format {
            HebOutputFormat::Unicode => OutputFormat::Unicode,
            HebOutputFormat::Html => OutputFormat::Html,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum HebSegment {
    Literal {
        text: String,
    },
    Unit {
        consonant: String,
        niqqud: Vec<String>,
        hebrew: String,
    },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn to_heb_segment(segment: &Segment<'_>, table: &HebrewTable) -> HebSegment {
    match segment {
        Segment::Literal(text) => HebSegment::Literal {
            text: text.to_string(),
        },
        Segment::Unit(unit) => {
            let mut hebrew = String::new();
            unit.render_into(table, &mut hebrew);
            HebSegment::Unit {
                consonant: unit.consonant.to_string(),
                niqqud: unit
                    .niqqud
                    .iter()
                    .filter(|n| !n.is_empty())
                    .map(|n| n.to_string())
                    .collect(),
                hebrew,
            }
        }
    }
}
