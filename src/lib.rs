//! Deck Navigator - A lightweight Rust CLI tool for browsing and drawing from
//! a numbered card-image deck.
//!
//! This library provides the core functionality for deck-navigator: filename
//! indexing, the immutable deck model with section and item semantics, the
//! stateful browse cursor, and random treasure composition. The CLI layer is
//! a thin renderer over these; the core is fully usable without it.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Directory scanning and trailing-number filename parsing
//! - The [`core::Deck`] model: slots 1..220, five named sections, item numbers
//! - The [`core::Navigator`] cursor: wrap-around prev/next, flips, item jumps
//! - Treasure composition with a seedable random source
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    compose,

    format_card_line,
    get_colored_section,
    // Color system (core functions)
    get_section_color_style,
    jpeg_stem,
    parse_trailing_number,
    // Indexing
    scan_cards,

    CardView,
    ComposeOptions,

    // Deck model
    Deck,

    // Command initialization
    DeckCommandContext,
    DeckCommandInit,

    // Error handling
    DeckNavigatorError,
    // Randomness
    DrawRng,
    DrawnCard,

    // Navigation
    Navigator,
    Result,
    Section,
    Side,

    // Treasure composition
    TreasureDraw,
    BACKS_PER_DRAW,
    ITEMS_START,
    ITEM_COUNT,
    MAX_SLOT,
    MIN_SLOT,
};
