//! Inputs the qualified identifier grammar accepts, and what it captures.

mod common;
use common::*;

use oxide_ident_core::dialect::MYSQL;
use oxide_ident_core::{GrammarConfig, IdentifierParser, QualifiedName};

#[test]
fn accept_single_name() {
    assert_eq!(parse_ok("abc"), ("abc".into(), String::new()));
}

#[test]
fn accept_single_character() {
    assert_eq!(parse_ok("cb"), ("cb".into(), String::new()));
    assert_eq!(parse_ok("x"), ("x".into(), String::new()));
}

#[test]
fn accept_schema_and_table() {
    assert_eq!(parse_ok("schema.table"), ("schema".into(), "table".into()));
}

#[test]
fn accept_leading_whitespace() {
    assert_eq!(parse_ok("  ca"), ("ca".into(), String::new()));
    assert_eq!(parse_ok("\t\n users"), ("users".into(), String::new()));
}

#[test]
fn accept_trailing_whitespace() {
    assert_eq!(parse_ok("1b  "), ("1b".into(), String::new()));
    assert_eq!(parse_ok("  1v "), ("1v".into(), String::new()));
}

#[test]
fn accept_qualified_with_surrounding_whitespace() {
    assert_eq!(parse_ok("  1kl.jk"), ("1kl".into(), "jk".into()));
    assert_eq!(parse_ok(" a.b \r\n"), ("a".into(), "b".into()));
}

#[test]
fn accept_quoted_first_part_with_whitespace() {
    assert_eq!(parse_ok("\"sch ema\".tbl"), ("sch ema".into(), "tbl".into()));
}

#[test]
fn accept_quoted_second_part() {
    assert_eq!(parse_ok("sch.\"tbl.s\""), ("sch".into(), "tbl.s".into()));
}

#[test]
fn accept_both_parts_quoted() {
    assert_eq!(
        parse_ok("\"sch\".\"tbl.s\""),
        ("sch".into(), "tbl.s".into())
    );
}

#[test]
fn accept_separator_inside_quotes() {
    assert_eq!(parse_ok("\"S.k\""), ("S.k".into(), String::new()));
}

#[test]
fn accept_quoted_with_trailing_whitespace() {
    assert_eq!(parse_ok(" \"a b\"  "), ("a b".into(), String::new()));
}

#[test]
fn accept_punctuation_in_plain_name() {
    assert_eq!(parse_ok("abc$"), ("abc$".into(), String::new()));
    assert_eq!(parse_ok("my-table_1"), ("my-table_1".into(), String::new()));
}

#[test]
fn accept_non_ascii_name() {
    assert_eq!(parse_ok("schéma.tabuľka"), ("schéma".into(), "tabuľka".into()));
}

#[test]
fn accept_unicode_space_as_name_character() {
    // only ASCII whitespace separates tokens
    assert_eq!(parse_ok("a\u{a0}b"), ("a\u{a0}b".into(), String::new()));
}

#[test]
fn accept_custom_delimiters() {
    let parser = IdentifierParser::new(GrammarConfig::new('[', ':').unwrap());
    let out = parser.parse("[my schema[:tbl.x");
    assert!(out.is_success());
    assert_eq!(out.first_part(), "my schema");
    assert_eq!(out.second_part(), "tbl.x");
}

#[test]
fn accept_mysql_backticks() {
    let parser = IdentifierParser::for_dialect(&MYSQL).unwrap();
    let out = parser.parse("`order`.`select`");
    assert_eq!(
        out.qualified_name(),
        Some(QualifiedName::qualified("order", "select"))
    );
}

#[test]
fn qualified_name_without_schema() {
    let out = parse("users");
    assert_eq!(out.qualified_name(), Some(QualifiedName::new("users")));
}

#[test]
fn repeated_parses_are_identical() {
    let parser = parser();
    for input in ["a.b", "  x ", "\"q q\".r", "bad.", "x y"] {
        assert_eq!(parser.parse(input), parser.parse(input), "{input:?}");
    }
}
