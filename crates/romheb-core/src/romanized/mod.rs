//! Romanized-Hebrew-to-Hebrew transliteration engine.
//!
//! Conversion runs two passes over the input: finality inference marks
//! word-final `K`, `M`, `N`, `P` and `Tz` with an explicit `f`, then each
//! consonant token and its (at most two) niqqud tokens are replaced through
//! the lookup table. Romanization:
//!
//! ```text
//! A  aleph   B  beth    G  gimel   D  dalet   H  heh     V  vav
//! Z  zayin   Ch chet    T  teth    I  yod     K  kaf     L  lamed
//! M  mem     N  nun     S  samekh  O  ayin    P  peh     Tz tzaddi
//! Q  qoph    R  resh    Sh shin    Th tav
//!
//! Ii yod-yod   Vi vav-yod   Vv vav-vav   Shl shin with left dot
//!
//! ;  sh'va     ;3 reduced segol   ;_ reduced patach   ;7 reduced kamatz
//! 1  hiriq     2  zeire           3  segol            _  patach
//! 7  kamatz    *  dagesh          \  kubutz           `  holam
//! ;; literal semicolon
//! ```
//!
//! A final-capable letter takes `f` (final) or `i` (not final) to override
//! the word-end rule.

mod config;
mod convert;
mod finality;
pub mod grammar;
mod substitute;
mod table;


pub use config::{find_unreachable_keys, parse_table_toml, TableConfigError, UnreachableKey};
pub use convert::{convert, convert_with_table};
pub use finality::infer_finals;
pub use substitute::{substitute, tokenize, Segment, Unit};
pub use table::{default_toml, HebrewTable, DEFAULT_TOML};
