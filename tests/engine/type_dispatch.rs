//! Integration tests for type-based clauses
//!
//! Tests `when_match` over trait objects, enums, and `dyn Any`.

use std::any::Any;
use std::fmt;

use casewise_engine::{Narrow, Patterns, Selection, is_a, or_else, patterns, then, then_apply, when, when_match};

// =============================================================================
// Trait Object Hierarchy
// =============================================================================

/// Common view over the three record kinds.
trait Record: Any + fmt::Debug {
    fn value(&self) -> &str;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
struct Plain(String);

#[derive(Debug)]
struct Tagged(String);

#[derive(Debug)]
struct Chatty(String);

impl Chatty {
    fn say(&self) -> String {
        format!("C here. I've got {}.", self.0)
    }
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn value(&self) -> &str {
                &self.0
            }
            fn as_any(&self) -> &dyn Any {
                self
            }
        })*
    };
}

impl_record!(Plain, Tagged, Chatty);

impl<T: Any> Narrow<T> for dyn Record {
    fn narrow(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

fn record_table() -> Patterns<dyn Record, String> {
    patterns![
        when_match(then_apply(|t: &Tagged| format!("it's a B. value: {}.", t.value()))),
        when_match(then_apply(Chatty::say)),
        or_else(then("it's a plain A.".to_string())),
    ]
    .unwrap()
}

fn records() -> Vec<Box<dyn Record>> {
    vec![
        Box::new(Plain("aaa".to_string())),
        Box::new(Tagged("bbb".to_string())),
        Box::new(Chatty("ccc".to_string())),
    ]
}

#[test]
fn specific_clauses_before_default() {
    let table = record_table();
    let actual: Vec<String> = records()
        .iter()
        .map(|r| table.get(&**r))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        actual,
        [
            "it's a plain A.",
            "it's a B. value: bbb.",
            "C here. I've got ccc.",
        ]
    );
}

#[test]
fn specific_clauses_under_optional_contract() {
    let table = record_table();
    let actual: Vec<String> = records()
        .iter()
        .map(|r| table.get_optionally(&**r).unwrap().unwrap())
        .collect();
    assert_eq!(actual[0], "it's a plain A.");
    assert_eq!(actual[1], "it's a B. value: bbb.");
    assert_eq!(actual[2], "C here. I've got ccc.");
}

#[test]
fn builder_dispatches_like_cases() {
    let table = Patterns::<dyn Record, String>::builder()
        .label("records")
        .when_match(then_apply(|t: &Tagged| format!("it's a B. value: {}.", t.value())))
        .when_match(then_apply(Chatty::say))
        .or_else(then("it's a plain A.".to_string()))
        .unwrap();

    assert_eq!(table.len(), 2);
    let actual: Vec<String> = records()
        .iter()
        .map(|r| table.get(&**r))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        actual,
        [
            "it's a plain A.",
            "it's a B. value: bbb.",
            "C here. I've got ccc.",
        ]
    );
}

#[test]
fn plain_record_falls_to_terminal() {
    let table = record_table();
    let plain: Box<dyn Record> = Box::new(Plain("x".to_string()));
    assert_eq!(table.select(&*plain), Selection::Terminal);
}

// =============================================================================
// Enum Dispatch
// =============================================================================

#[derive(Debug)]
enum Reading {
    Celsius(f64),
    Label(String),
    Missing,
}

impl Narrow<f64> for Reading {
    fn narrow(&self) -> Option<&f64> {
        match self {
            Self::Celsius(c) => Some(c),
            _ => None,
        }
    }
}

impl Narrow<String> for Reading {
    fn narrow(&self) -> Option<&String> {
        match self {
            Self::Label(s) => Some(s),
            _ => None,
        }
    }
}

#[test]
fn enum_variants_dispatch_by_payload() {
    let table: Patterns<Reading, String> = patterns![
        when_match(then_apply(|c: &f64| format!("{c:.1}C"))),
        when_match(then_apply(|s: &String| s.to_uppercase())),
    ]
    .unwrap();

    assert_eq!(table.get(&Reading::Celsius(21.55)).unwrap(), "21.6C");
    assert_eq!(table.get(&Reading::Label("ok".into())).unwrap(), "OK");

    let err = table.get(&Reading::Missing).unwrap_err();
    assert_eq!(err.key(), Some("Missing"));
}

#[test]
fn type_test_predicate_mixes_with_plain_clauses() {
    let table: Patterns<Reading, &str> = patterns![
        when(is_a::<Reading, f64>(), then("numeric")),
        when(|r: &Reading| matches!(r, Reading::Missing), then("missing")),
        or_else(then("other")),
    ]
    .unwrap();

    assert_eq!(table.get(&Reading::Celsius(0.0)).unwrap(), "numeric");
    assert_eq!(table.get(&Reading::Missing).unwrap(), "missing");
    assert_eq!(table.get(&Reading::Label(String::new())).unwrap(), "other");
}

// =============================================================================
// dyn Any
// =============================================================================

#[test]
fn any_values_dispatch_by_concrete_type() {
    let table: Patterns<dyn Any + Send + Sync, String> = patterns![
        when_match(then_apply(|n: &u64| format!("u64 {n}"))),
        when_match(then_apply(|s: &String| format!("string {s}"))),
        or_else(then("unknown".to_string())),
    ]
    .unwrap();

    let values: Vec<Box<dyn Any + Send + Sync>> = vec![
        Box::new(7_u64),
        Box::new(String::from("hi")),
        Box::new(1.5_f32),
    ];
    let actual: Vec<String> = values
        .iter()
        .map(|v| table.get(&**v).unwrap())
        .collect();
    assert_eq!(actual, ["u64 7", "string hi", "unknown"]);
}
