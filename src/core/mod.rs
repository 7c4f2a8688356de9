//! Core functionality for the deck-navigator tool.
//!
//! This module provides the fundamental building blocks: filename parsing,
//! directory indexing, the immutable deck model, navigation, random treasure
//! composition, error handling and CLI output helpers.

pub mod colors;
pub mod command_init;
pub mod composer;
pub mod deck;
pub mod error;
pub mod filename;
pub mod indexer;
pub mod navigator;
pub mod output;
pub mod rng;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{DeckNavigatorError, Result};

// === Deck model ===
// Immutable slot/section/item semantics over the indexed card files
pub use deck::{Deck, Section, Side, SlotPaths, ITEMS_START, ITEM_COUNT, MAX_SLOT, MIN_SLOT};

// === Indexing ===
// Directory scan building the deck; filename parsing kept pure and separate
pub use filename::{jpeg_stem, parse_trailing_number};
pub use indexer::scan_cards;

// === Navigation ===
// Stateful cursor with section-aware movement and item jumps
pub use navigator::{CardView, Navigator};

// === Treasure composition ===
// Random one-front-four-backs draw with an injectable RNG
pub use composer::{compose, ComposeOptions, DrawnCard, TreasureDraw, BACKS_PER_DRAW};
pub use rng::DrawRng;

// === Command initialization ===
// Shared folder-resolution and scan step for all subcommands
pub use command_init::{DeckCommandContext, DeckCommandInit};

// === Color system ===
// Section color scheme and card line formatting
pub use colors::{format_card_line, get_colored_section, get_section_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_error, print_error_with_structured_usage, print_info, print_section_header, print_success,
};
