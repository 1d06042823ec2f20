//! Module: table
//!
//! Purpose: static bidirectional mapping between symbol sequences and
//! the 36-character alphabet (A-Z, 0-9).
//!
//! The table is immutable process-wide state. Lookup of an unknown
//! sequence yields `None`; the controller renders that as
//! [`UNKNOWN_MARKER`] in the phrase.

use crate::symbol::Symbol;

/// Number of supported characters.
pub const ALPHABET_LEN: usize = 36;

/// Visible marker committed to the phrase when a sequence fails to
/// decode.
pub const UNKNOWN_MARKER: char = '?';

/// Morse code patterns for A-Z then 0-9.
#[rustfmt::skip]
const CODES: [&str; ALPHABET_LEN] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---",  // A-J
    "-.-", ".-..", "--", "-.", "---", ".--.", "--.-", ".-.", "...", "-",    // K-T
    "..-", "...-", ".--", "-..-", "-.--", "--..",                           // U-Z
    "-----", ".----", "..---", "...--", "....-",                            // 0-4
    ".....", "-....", "--...", "---..", "----.",                            // 5-9
];

/// Characters corresponding to [`CODES`], index for index.
const CHARSET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Decode a symbol sequence into its character.
///
/// Returns `None` for the empty sequence and for any sequence not in
/// the table. Output is uppercase only.
pub fn decode(sequence: &[Symbol]) -> Option<char> {
    if sequence.is_empty() {
        return None;
    }
    CODES
        .iter()
        .position(|code| matches(code, sequence))
        .map(|i| CHARSET[i] as char)
}

/// Encode a character into its dot/dash pattern.
///
/// Case-insensitive; returns `None` for characters outside A-Z, 0-9.
pub fn encode(character: char) -> Option<&'static str> {
    let upper = character.to_ascii_uppercase();
    CHARSET
        .iter()
        .position(|&b| b as char == upper)
        .map(|i| CODES[i])
}

/// Exact comparison of a pattern string against a symbol slice.
fn matches(code: &str, sequence: &[Symbol]) -> bool {
    code.len() == sequence.len()
        && code
            .bytes()
            .zip(sequence.iter())
            .all(|(b, s)| s.as_char() as u8 == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol::{Dash, Dot};

    #[test]
    fn test_decode_known_sequences() {
        assert_eq!(decode(&[Dot, Dot, Dot]), Some('S'));
        assert_eq!(decode(&[Dash, Dash]), Some('M'));
        assert_eq!(decode(&[Dot]), Some('E'));
        assert_eq!(decode(&[Dash, Dash, Dash, Dash, Dash]), Some('0'));
        assert_eq!(decode(&[Dot, Dash, Dash, Dash, Dash]), Some('1'));
    }

    #[test]
    fn test_decode_unknown_sequence() {
        // Seven dots is not in the table.
        assert_eq!(decode(&[Dot; 7]), None);
        assert_eq!(decode(&[Dash, Dot, Dash, Dot, Dash, Dot]), None);
    }

    #[test]
    fn test_decode_empty_is_unknown() {
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn test_encode_known_characters() {
        assert_eq!(encode('S'), Some("..."));
        assert_eq!(encode('m'), Some("--")); // case normalized
        assert_eq!(encode('5'), Some("....."));
    }

    #[test]
    fn test_encode_unknown_characters() {
        assert_eq!(encode('?'), None);
        assert_eq!(encode(' '), None);
        assert_eq!(encode('ß'), None);
    }

    #[test]
    fn test_each_sequence_maps_to_one_character() {
        for (i, code) in CODES.iter().enumerate() {
            for (j, other) in CODES.iter().enumerate() {
                if i != j {
                    assert_ne!(code, other, "duplicate pattern in table");
                }
            }
        }
        assert_eq!(CODES.len(), CHARSET.len());
    }
}
