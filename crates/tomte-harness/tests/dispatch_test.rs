//! Dispatcher fault-injection tests.
//!
//! Exercise the single-attempt delivery loop against scripted transports:
//! every notice is attempted exactly once, failures are isolated to their
//! recipient, and the report arithmetic holds up.

use tomte_dispatch::{DeliveryOutcome, Dispatcher, Notice};
use tomte_harness::{MemoryPost, ScriptedPost};

fn notices(pairs: &[(&str, &str)]) -> Vec<Notice> {
    pairs
        .iter()
        .map(|(giver, receiver)| {
            Notice::new(*giver, format!("{}@example.org", giver.to_lowercase()), *receiver)
        })
        .collect()
}

#[test]
fn pair_swap_attempts_exactly_two_deliveries() {
    let dispatcher = Dispatcher::new(MemoryPost::new());
    let batch = notices(&[("Alice", "Bob"), ("Bob", "Alice")]);

    let report = dispatcher.run(&batch);

    assert_eq!(report.attempted(), 2);
    assert_eq!(report.delivered(), 2);
    assert!(report.is_complete());
    assert_eq!(dispatcher.transport().accepted_count(), 2);
}

#[test]
fn notices_go_out_in_order() {
    let dispatcher = Dispatcher::new(MemoryPost::new());
    let batch = notices(&[("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Alice")]);

    dispatcher.run(&batch);

    let givers: Vec<String> =
        dispatcher.transport().accepted().iter().map(|n| n.giver().to_string()).collect();
    assert_eq!(givers, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn single_failure_reports_all_but_one_delivered() {
    let dispatcher = Dispatcher::new(ScriptedPost::failing_for(["Bob"]));
    let batch =
        notices(&[("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Dora"), ("Dora", "Alice")]);

    let report = dispatcher.run(&batch);

    assert_eq!(report.attempted(), 4);
    assert_eq!(report.delivered(), 3);
    assert!(!report.is_complete());

    let failed: Vec<&str> = report.failures().map(DeliveryOutcome::giver).collect();
    assert_eq!(failed, vec!["Bob"]);
}

#[test]
fn early_failure_never_blocks_later_recipients() {
    let post = ScriptedPost::failing_for(["Alice"]);
    let dispatcher = Dispatcher::new(post);
    let batch = notices(&[("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Alice")]);

    let report = dispatcher.run(&batch);

    assert_eq!(dispatcher.transport().attempted(), vec!["Alice", "Bob", "Carol"]);
    assert_eq!(report.delivered(), 2);
}

#[test]
fn every_recipient_failing_delivers_nothing() {
    let dispatcher = Dispatcher::new(ScriptedPost::failing_for(["Alice", "Bob"]));
    let batch = notices(&[("Alice", "Bob"), ("Bob", "Alice")]);

    let report = dispatcher.run(&batch);

    assert_eq!(report.attempted(), 2);
    assert_eq!(report.delivered(), 0);
    assert!(!report.is_complete());
    assert!(dispatcher.transport().accepted().is_empty());
}

#[test]
fn report_display_matches_counts() {
    let dispatcher = Dispatcher::new(ScriptedPost::failing_for(["Carol"]));
    let batch = notices(&[("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Alice")]);

    let report = dispatcher.run(&batch);

    assert_eq!(report.to_string(), "delivered 2 of 3 notices");
}
