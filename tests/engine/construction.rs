//! Integration tests for table construction
//!
//! Tests the variadic constructor, the builder, and configuration limits.

use casewise_engine::{
    Case, ErrorKind, Patterns, TableConfig, equals_to, or_else, or_else_throw, patterns,
    patterns_with, then, when,
};

type Table = Patterns<u8, &'static str, String>;

#[test]
fn terminal_must_be_last() {
    let result: casewise_engine::Result<Table> = patterns![
        or_else(then("default")),
        when(equals_to(1), then("one")),
    ];
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::TerminalNotLast { position: 0, len: 2 });
    assert!(err.context.is_none());
}

#[test]
fn only_one_terminal() {
    let result: casewise_engine::Result<Table> = patterns![
        or_else_throw(|b: &u8| format!("bad byte {b}")),
        or_else(then("default")),
    ];
    assert_eq!(
        result.unwrap_err().kind,
        ErrorKind::DuplicateTerminal { first: 0, second: 1 }
    );
}

#[test]
fn errors_carry_table_label() {
    let config = TableConfig::labeled("opcodes");
    let result: casewise_engine::Result<Table> = patterns_with(
        &config,
        vec![
            Case::from(or_else(then("default"))),
            Case::from(when(equals_to(1), then("one"))),
        ],
    );
    let err = result.unwrap_err();
    assert_eq!(
        err.context.and_then(|c| c.table).as_deref(),
        Some("opcodes")
    );
}

#[test]
fn cases_accept_any_iterator() {
    let cases = (0..4_u8).map(|b| Case::from(when(equals_to(b), then("low"))));
    let table: Table = patterns(cases).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.get(&2).unwrap(), "low");
    assert!(table.get(&200).unwrap_err().is_no_such_pattern());
}

#[test]
fn builder_respects_config() {
    let result = Table::builder()
        .config(TableConfig::default().with_max_clauses(1))
        .when(|b| *b < 10, then("small"))
        .when(|b| *b < 100, then("medium"))
        .or_else(then("large"));
    assert_eq!(
        result.unwrap_err().kind,
        ErrorKind::TooManyClauses { limit: 1, actual: 2 }
    );
}

#[test]
fn builder_and_macro_agree() {
    let built = Table::builder()
        .when(|b| *b < 10, then("small"))
        .or_else(then("large"))
        .unwrap();
    let listed: Table = patterns![
        when(|b: &u8| *b < 10, then("small")),
        or_else(then("large")),
    ]
    .unwrap();

    for b in [0_u8, 9, 10, 255] {
        assert_eq!(built.get(&b).unwrap(), listed.get(&b).unwrap());
    }
}
