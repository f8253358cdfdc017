pub mod format;
pub mod romanized;

pub use format::OutputFormat;
pub use romanized::{convert, convert_with_table};
