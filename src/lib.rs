uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use romheb_core::{convert, convert_with_table, format, romanized, OutputFormat};
