//! Morse table tests

use rust_morse_translator::symbol::Symbol;
use rust_morse_translator::table::{decode, encode};

/// Parse a dot/dash pattern string into symbols.
fn parse(pattern: &str) -> Vec<Symbol> {
    pattern
        .chars()
        .map(|c| Symbol::from_char(c).expect("pattern contains only . and -"))
        .collect()
}

#[test]
fn test_roundtrip_all_36_characters() {
    let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    for c in alphabet.chars() {
        let pattern = encode(c).expect("every alphabet character encodes");
        let symbols = parse(pattern);
        assert_eq!(decode(&symbols), Some(c), "roundtrip failed for '{}'", c);
    }
}

#[test]
fn test_decode_letters() {
    assert_eq!(decode(&parse(".-")), Some('A'));
    assert_eq!(decode(&parse("-...")), Some('B'));
    assert_eq!(decode(&parse("...")), Some('S'));
    assert_eq!(decode(&parse("---")), Some('O'));
    assert_eq!(decode(&parse("--..")), Some('Z'));
}

#[test]
fn test_decode_digits() {
    assert_eq!(decode(&parse("-----")), Some('0'));
    assert_eq!(decode(&parse(".----")), Some('1'));
    assert_eq!(decode(&parse("...--")), Some('3'));
    assert_eq!(decode(&parse("----.")), Some('9'));
}

#[test]
fn test_decode_unknown_sequences() {
    assert_eq!(decode(&parse(".......")), None);
    assert_eq!(decode(&parse("------")), None);
    assert_eq!(decode(&parse(".-.-.-")), None);
}

#[test]
fn test_decode_empty_sequence() {
    assert_eq!(decode(&[]), None);
}

#[test]
fn test_encode_is_case_insensitive() {
    for c in 'a'..='z' {
        assert_eq!(encode(c), encode(c.to_ascii_uppercase()));
    }
}

#[test]
fn test_encode_rejects_unsupported() {
    assert_eq!(encode(' '), None);
    assert_eq!(encode('?'), None);
    assert_eq!(encode('.'), None);
    assert_eq!(encode('é'), None);
}
