#![allow(dead_code)]

use oxide_ident_core::{GrammarConfig, IdentifierParser, MatchStatus, ParseOutcome};

pub fn parser() -> IdentifierParser {
    IdentifierParser::new(GrammarConfig::default())
}

pub fn parse(input: &str) -> ParseOutcome {
    parser().parse(input)
}

/// Parses `input` and asserts a full match, returning `(B, C)`.
pub fn parse_ok(input: &str) -> (String, String) {
    let out = parse(input);
    assert!(
        out.is_success(),
        "Expected match for: {input:?}\nOutcome: {out:?}"
    );
    (out.first_part().to_string(), out.second_part().to_string())
}

/// Parses `input` and asserts it is rejected, returning the outcome.
pub fn parse_err(input: &str) -> ParseOutcome {
    let out = parse(input);
    assert!(
        !out.is_success(),
        "Expected rejection for: {input:?}\nOutcome: {out:?}"
    );
    out
}

pub fn trailing_at(input: &str) -> usize {
    match parse(input).status() {
        MatchStatus::TrailingInput { position } => position,
        other => panic!("Expected trailing input for {input:?}, got {other:?}"),
    }
}
