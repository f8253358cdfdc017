//! Byte-level token grammar shared by the finality and substitution passes.
//!
//! Every grammar symbol is ASCII, so scanners work on bytes; a non-ASCII
//! byte never starts or continues a token, which keeps every slice boundary
//! on a char boundary.

/// Lowercase characters that may follow a consonant's base letter.
pub const MODIFIERS: &[u8] = b"fhilvz";

/// Bare single-character niqqud symbols.
const BARE_NIQQUD: &[u8] = b"1237_*\\`";

/// Characters allowed after `;` in a two-character niqqud token.
const SEMICOLON_SUFFIX: &[u8] = b";37_";

/// Letters with a distinct final glyph, as romanized spellings.
pub const FINAL_CANDIDATES: [&str; 5] = ["K", "M", "N", "P", "Tz"];

pub(crate) fn is_modifier(b: u8) -> bool {
    MODIFIERS.contains(&b)
}

/// ASCII word character (`[A-Za-z0-9_]`). Non-ASCII bytes are non-word.
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Length of the consonant token starting at `i`: one uppercase letter plus
/// the maximal run of modifiers. Table membership plays no part here.
pub(crate) fn consonant_len(bytes: &[u8], i: usize) -> Option<usize> {
    if !bytes.get(i)?.is_ascii_uppercase() {
        return None;
    }
    let mut j = i + 1;
    while j < bytes.len() && is_modifier(bytes[j]) {
        j += 1;
    }
    Some(j - i)
}

/// Length of the niqqud token starting at `i`, if any.
pub(crate) fn niqqud_len(bytes: &[u8], i: usize) -> Option<usize> {
    match *bytes.get(i)? {
        b';' => match bytes.get(i + 1) {
            Some(b) if SEMICOLON_SUFFIX.contains(b) => Some(2),
            _ => Some(1),
        },
        b if BARE_NIQQUD.contains(&b) => Some(1),
        _ => None,
    }
}

/// Length of the bare final-letter candidate starting at `i` (`Tz` is two
/// bytes, the others one).
pub(crate) fn final_candidate_len(bytes: &[u8], i: usize) -> Option<usize> {
    let rest = bytes.get(i..)?;
    FINAL_CANDIDATES
        .iter()
        .find(|spelling| rest.starts_with(spelling.as_bytes()))
        .map(|spelling| spelling.len())
}

/// True if `s` is exactly one consonant token.
pub fn is_consonant_token(s: &str) -> bool {
    consonant_len(s.as_bytes(), 0) == Some(s.len())
}

/// True if `s` is exactly one niqqud token.
pub fn is_niqqud_token(s: &str) -> bool {
    niqqud_len(s.as_bytes(), 0) == Some(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consonant_is_greedy_over_modifiers() {
        assert_eq!(consonant_len(b"Shl3", 0), Some(3));
        // `r` is not a modifier.
        assert_eq!(consonant_len(b"Shr3", 0), Some(2));
        assert_eq!(consonant_len(b"Tzfi", 0), Some(4));
        assert_eq!(consonant_len(b"A", 0), Some(1));
        assert_eq!(consonant_len(b"aB", 0), None);
        assert_eq!(consonant_len(b"Ba", 0), Some(1));
    }

    #[test]
    fn niqqud_semicolon_forms() {
        assert_eq!(niqqud_len(b";", 0), Some(1));
        assert_eq!(niqqud_len(b";;", 0), Some(2));
        assert_eq!(niqqud_len(b";3", 0), Some(2));
        assert_eq!(niqqud_len(b";2", 0), Some(1));
        assert_eq!(niqqud_len(b";x", 0), Some(1));
    }

    #[test]
    fn niqqud_bare_symbols() {
        for b in BARE_NIQQUD {
            assert_eq!(niqqud_len(&[*b], 0), Some(1), "symbol {}", *b as char);
        }
        assert_eq!(niqqud_len(b"4", 0), None);
        assert_eq!(niqqud_len(b"", 0), None);
    }

    #[test]
    fn final_candidates() {
        assert_eq!(final_candidate_len(b"M", 0), Some(1));
        assert_eq!(final_candidate_len(b"Tz", 0), Some(2));
        assert_eq!(final_candidate_len(b"Th", 0), None);
        assert_eq!(final_candidate_len(b"B", 0), None);
        assert_eq!(final_candidate_len(b"AM", 1), Some(1));
        assert_eq!(final_candidate_len(b"M", 1), None);
        assert_eq!(final_candidate_len(b"M", 5), None);
        for spelling in FINAL_CANDIDATES {
            assert_eq!(
                final_candidate_len(spelling.as_bytes(), 0),
                Some(spelling.len())
            );
        }
    }

    #[test]
    fn whole_token_checks() {
        assert!(is_consonant_token("Shl"));
        assert!(!is_consonant_token("Shr"));
        assert!(!is_consonant_token("Sh3"));
        assert!(!is_consonant_token("sh"));
        assert!(is_niqqud_token(";;"));
        assert!(is_niqqud_token("\\"));
        assert!(!is_niqqud_token(";;;"));
        assert!(!is_niqqud_token("A"));
    }

    #[test]
    fn word_bytes() {
        assert!(is_word_byte(b'_'));
        assert!(is_word_byte(b'7'));
        assert!(!is_word_byte(b' '));
        assert!(!is_word_byte(b';'));
        assert!(!is_word_byte(0xD7));
    }
}
