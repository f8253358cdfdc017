use tracing::{debug, debug_span};

use super::grammar::{consonant_len, niqqud_len};
use super::table::HebrewTable;

/// One consonant token with up to two trailing niqqud tokens.
///
/// Missing niqqud slots are empty strings, which look up to empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    pub consonant: &'a str,
    pub niqqud: [&'a str; 2],
}

impl Unit<'_> {
    /// The unit's source spelling.
    pub fn source(&self) -> String {
        format!("{}{}{}", self.consonant, self.niqqud[0], self.niqqud[1])
    }

    /// Concatenation of the three independent lookups.
    pub fn render_into(&self, table: &HebrewTable, out: &mut String) {
        out.push_str(table.lookup(self.consonant));
        out.push_str(table.lookup(self.niqqud[0]));
        out.push_str(table.lookup(self.niqqud[1]));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that never matched the unit pattern, emitted verbatim.
    Literal(&'a str),
    Unit(Unit<'a>),
}

/// Split `input` left to right into non-overlapping units and the literal
/// runs between them.
pub fn tokenize(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let Some(clen) = consonant_len(bytes, i) else {
            i += 1;
            continue;
        };
        if literal_start < i {
            segments.push(Segment::Literal(&input[literal_start..i]));
        }

        let consonant_end = i + clen;
        let first_end = consonant_end + niqqud_len(bytes, consonant_end).unwrap_or(0);
        let second_end = first_end + niqqud_len(bytes, first_end).unwrap_or(0);

        segments.push(Segment::Unit(Unit {
            consonant: &input[i..consonant_end],
            niqqud: [
                &input[consonant_end..first_end],
                &input[first_end..second_end],
            ],
        }));
        i = second_end;
        literal_start = i;
    }
    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }
    segments
}

/// Replace every unit in `input` with its table rendering.
pub fn substitute(input: &str, table: &HebrewTable) -> String {
    let _span = debug_span!("substitute", len = input.len()).entered();
    let segments = tokenize(input);
    let mut out = String::with_capacity(input.len() * 2);
    let mut units = 0usize;
    for segment in &segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Unit(unit) => {
                unit.render_into(table, &mut out);
                units += 1;
            }
        }
    }
    debug!(units, segments = segments.len(), "substituted");
    out
}
