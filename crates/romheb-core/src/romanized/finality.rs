use tracing::{debug, debug_span};

use super::grammar::{final_candidate_len, is_word_byte, niqqud_len};

/// Insert an explicit `f` after every bare final-letter candidate that ends a
/// word.
///
/// A candidate ends a word when the niqqud tokens after it are followed by a
/// non-word character or the end of input. Candidates already followed by a
/// modifier (`Kf`, `Mi`, ...) are left alone, since the modifier is a word
/// character. The inserted `f` goes directly after the letter, before its
/// niqqud, and is never rescanned.
pub fn infer_finals(input: &str) -> String {
    let _span = debug_span!("infer_finals", len = input.len()).entered();
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len() + 4);
    let mut copied = 0;
    let mut rewrites = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        let Some(n) = final_candidate_len(bytes, i) else {
            i += 1;
            continue;
        };
        let end = i + n;
        let mut j = end;
        while let Some(k) = niqqud_len(bytes, j) {
            j += k;
        }
        if j == bytes.len() || !is_word_byte(bytes[j]) {
            out.push_str(&input[copied..end]);
            out.push('f');
            copied = end;
            rewrites += 1;
        }
        i = end;
    }
    out.push_str(&input[copied..]);

    debug!(rewrites, "inferred finals");
    out
}
