//! Integration tests for shared evaluation
//!
//! Tables are immutable after construction and can be read from many
//! threads at once.

use std::sync::Arc;
use std::thread;

use casewise_engine::{Patterns, PatternsBuilder, equals_to, or_else, patterns, then, then_apply, when};

fn assert_send_sync<T: Send + Sync>() {}

fn fizz_table() -> Patterns<u32, String> {
    patterns![
        when(|n: &u32| n % 15 == 0, then("FizzBuzz".to_string())),
        when(|n: &u32| n % 3 == 0, then("Fizz".to_string())),
        when(|n: &u32| n % 5 == 0, then("Buzz".to_string())),
        when(equals_to(0), then("zero".to_string())),
        or_else(then_apply(|n: &u32| n.to_string())),
    ]
    .unwrap()
}

#[test]
fn tables_are_send_and_sync() {
    assert_send_sync::<Patterns<u32, String>>();
    assert_send_sync::<Patterns<str, Vec<u8>, std::io::Error>>();
    assert_send_sync::<Patterns<u32, String, std::rc::Rc<str>>>();
    assert_send_sync::<PatternsBuilder<u32, String, std::rc::Rc<str>>>();
}

#[test]
fn scoped_threads_share_a_table() {
    let table = fizz_table();
    let expected: Vec<String> = (1..=30).map(|n| table.get(&n).unwrap()).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (1..=30).map(|n| table.get(&n).unwrap()).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn arc_table_across_spawned_threads() {
    let table = Arc::new(fizz_table());
    let handles: Vec<_> = (0..4_u32)
        .map(|offset| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.get(&(offset * 15)).unwrap())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // 0 is a multiple of 15, so the first clause wins over `equals_to(0)`.
    assert!(results.iter().all(|r| r == "FizzBuzz"));
}
