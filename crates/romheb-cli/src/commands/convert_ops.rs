use std::io::{self, BufRead};

use serde::Serialize;

use romheb_core::romanized::{infer_finals, tokenize, HebrewTable, Segment};
use romheb_core::{convert_with_table, OutputFormat};

use super::{codepoints, die, load_table, table_or_global};

pub fn convert_cmd(texts: &[String], format: OutputFormat, table: Option<&str>) {
    let custom = table.map(|path| die!(load_table(path), "Error loading table: {}"));
    let table = table_or_global(custom.as_ref());

    if !texts.is_empty() {
        for text in texts {
            println!("{}", convert_with_table(table, text, format));
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        println!("{}", convert_with_table(table, &line, format));
    }
}

/// One row of an explanation: a literal run or a substitution unit.
#[derive(Debug, Serialize)]
pub struct ExplainSegment {
    pub kind: &'static str,
    pub source: String,
    pub hebrew: String,
    pub codepoints: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Explanation {
    pub input: String,
    pub finals: String,
    pub segments: Vec<ExplainSegment>,
    pub output: String,
}

/// Break a conversion down into its finality rewrite and per-unit lookups.
pub fn explain(input: &str, table: &HebrewTable) -> Explanation {
    let finals = infer_finals(input);
    let segments: Vec<ExplainSegment> = tokenize(&finals)
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => ExplainSegment {
                kind: "literal",
                source: text.to_string(),
                hebrew: text.to_string(),
                codepoints: codepoints(text),
            },
            Segment::Unit(unit) => {
                let mut hebrew = String::new();
                unit.render_into(table, &mut hebrew);
                ExplainSegment {
                    kind: "unit",
                    source: unit.source(),
                    codepoints: codepoints(&hebrew),
                    hebrew,
                }
            }
        })
        .collect();
    let output = segments.iter().map(|s| s.hebrew.as_str()).collect();

    Explanation {
        input: input.to_string(),
        finals,
        segments,
        output,
    }
}

pub fn explain_cmd(text: &str, table: Option<&str>, json: bool) {
    let custom = table.map(|path| die!(load_table(path), "Error loading table: {}"));
    let explanation = explain(text, table_or_global(custom.as_ref()));

    if json {
        let out = die!(
            serde_json::to_string_pretty(&explanation),
            "Error serializing explanation: {}"
        );
        println!("{out}");
        return;
    }

    println!("input:  {}", explanation.input);
    println!("finals: {}", explanation.finals);
    for seg in &explanation.segments {
        println!(
            "  {:<7} {:<8} -> {}  [{}]",
            seg.kind,
            format!("{:?}", seg.source),
            seg.hebrew,
            seg.codepoints.join(" ")
        );
    }
    println!("output: {}", explanation.output);
}

pub fn lookup_cmd(token: &str, table: Option<&str>) {
    let custom = table.map(|path| die!(load_table(path), "Error loading table: {}"));
    let table = table_or_global(custom.as_ref());
    match table.get(token) {
        Some(value) => println!("{token} -> {value}  [{}]", codepoints(value).join(" ")),
        None => println!("{token} -> (not in table, passes through unchanged)"),
    }
}
