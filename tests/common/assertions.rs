//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating deck-navigator command output,
//! error messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the bad-folder advisory
pub fn folder_advisory() -> impl Predicate<str> {
    predicates::str::contains("Card directory does not exist")
        .or(predicates::str::contains("No card images found"))
        .or(predicates::str::contains("Cannot read card directory"))
}

/// Creates a predicate that checks for the re-point-cards usage hint
pub fn cards_usage_hint() -> impl Predicate<str> {
    predicates::str::contains("--cards <DIR>")
}

/// Creates a predicate that checks for the insufficient-cards advisory
pub fn insufficient_cards() -> impl Predicate<str> {
    predicates::str::contains("Not enough card images")
}

/// Creates a predicate that checks for a bracketed slot marker
pub fn has_slot(slot: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{slot:>3}]"))
}

/// Creates a predicate that checks for a section label
pub fn has_section(label: &str) -> impl Predicate<str> {
    predicates::str::contains(label.to_string())
}

/// Creates a predicate that checks for an item number field
pub fn has_item(item: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("item {item}"))
}
