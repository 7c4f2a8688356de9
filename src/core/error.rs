//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`DeckNavigatorError`] which covers every failure mode of
//! deck-navigator operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`DeckNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, DeckNavigatorError>`
//!
//! # Error Categories
//! - **Indexing**: Missing or unreadable card directory — fatal to that scan
//!   attempt, recoverable by pointing `--cards` at a different folder
//! - **Caller misuse**: Slot or item number outside its valid range — the
//!   request is rejected and navigator state is left unchanged
//! - **Draw capacity**: Not enough front/back images for a treasure draw —
//!   surfaced as an advisory message, never a partial draw

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for deck-navigator
#[derive(Error, Debug)]
pub enum DeckNavigatorError {
    // Indexing errors
    #[error("Card directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Cannot read card directory '{path}': {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No card images found in '{path}'. Filenames must end in a number 1-220 (e.g. EndlessTreasure_21.jpg)")]
    NoCardsFound { path: PathBuf },

    // Caller misuse errors
    #[error("Slot {slot} is out of range (1-220)")]
    SlotOutOfRange { slot: u32 },

    #[error("Item {item} is out of range (1-100)")]
    InvalidItem { item: u32 },

    #[error("Not enough card images for a treasure draw: {fronts} front(s) and {backs} back(s) available, need at least 1 front and {backs_needed} backs")]
    InsufficientCards {
        fronts: usize,
        backs: usize,
        backs_needed: usize,
    },

    // Interactive browse input
    #[error("Unknown browse command: '{input}'. Use n, p, f, l, b, j <item> or q")]
    UnknownBrowseCommand { input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using DeckNavigatorError
pub type Result<T> = std::result::Result<T, DeckNavigatorError>;

impl DeckNavigatorError {
    /// Create a directory not found error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create a directory unreadable error
    pub fn directory_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a no cards found error
    pub fn no_cards_found(path: impl Into<PathBuf>) -> Self {
        Self::NoCardsFound { path: path.into() }
    }

    /// Create a slot out of range error
    pub fn slot_out_of_range(slot: u32) -> Self {
        Self::SlotOutOfRange { slot }
    }

    /// Create an invalid item error
    pub fn invalid_item(item: u32) -> Self {
        Self::InvalidItem { item }
    }

    /// Create an insufficient cards error
    pub fn insufficient_cards(fronts: usize, backs: usize, backs_needed: usize) -> Self {
        Self::InsufficientCards {
            fronts,
            backs,
            backs_needed,
        }
    }

    /// Create an unknown browse command error
    pub fn unknown_browse_command(input: impl Into<String>) -> Self {
        Self::UnknownBrowseCommand {
            input: input.into(),
        }
    }
}
