pub mod convert_ops;
pub mod table_ops;

use std::fs;

use romheb_core::romanized::{HebrewTable, TableConfigError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Table {
        path: String,
        source: TableConfigError,
    },
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Read and validate a table file.
pub fn load_table(path: &str) -> Result<HebrewTable, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    HebrewTable::from_toml(&content).map_err(|source| CliError::Table {
        path: path.to_string(),
        source,
    })
}

/// The table named by `--table`, or the built-in one.
pub(crate) fn table_or_global(custom: Option<&HebrewTable>) -> &HebrewTable {
    match custom {
        Some(table) => table,
        None => HebrewTable::global(),
    }
}

/// `U+05D0 U+05BC` style listing of a string's codepoints.
pub fn codepoints(s: &str) -> Vec<String> {
    s.chars().map(|c| format!("U+{:04X}", c as u32)).collect()
}
