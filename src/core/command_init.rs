//! Centralized initialization for deck commands.
//!
//! Every subcommand starts the same way: resolve the cards folder, scan it
//! into a deck, and decide whether an empty deck is acceptable. This module
//! centralizes that so the commands stay small.
//!
//! # Public API
//! - [`DeckCommandInit`]: Static initializers for the two empty-deck policies
//! - [`DeckCommandContext`]: Resolved folder plus the immutable deck
//!
//! # Initialization Steps
//! 1. **Folder resolution**: `--cards` value, or the current directory
//! 2. **Scan**: one synchronous directory listing into a [`Deck`]
//! 3. **Emptiness policy**: commands that need cards reject an empty deck
//!    with the advisory `NoCardsFound`; `scan` reports it instead

use crate::core::deck::Deck;
use crate::core::error::{DeckNavigatorError, Result};
use crate::core::indexer::scan_cards;
use crate::core::rng::DrawRng;
use std::env;
use std::path::PathBuf;

/// Initialized context shared by every command
#[derive(Debug)]
pub struct DeckCommandContext {
    pub folder: PathBuf,
    pub deck: Deck,
}

/// Centralized initialization for commands operating on a scanned deck
pub struct DeckCommandInit;

impl DeckCommandInit {
    /// Resolve the folder and scan it; an empty deck is an error here.
    ///
    /// Used by every command that actually addresses cards (`show`, `draw`,
    /// `browse`). The returned `NoCardsFound` is the advisory that tells the
    /// user to re-point `--cards`.
    pub fn initialize(cards_dir: Option<PathBuf>) -> Result<DeckCommandContext> {
        let context = Self::initialize_allow_empty(cards_dir)?;
        if context.deck.is_empty() {
            return Err(DeckNavigatorError::no_cards_found(&context.folder));
        }
        Ok(context)
    }

    /// Resolve the folder and scan it, accepting an empty deck.
    pub fn initialize_allow_empty(cards_dir: Option<PathBuf>) -> Result<DeckCommandContext> {
        let folder = match cards_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        log::debug!("scanning cards folder {}", folder.display());
        let deck = scan_cards(&folder)?;
        Ok(DeckCommandContext { folder, deck })
    }
}

impl DeckCommandContext {
    /// RNG for the random operations: fixed seed when given, OS entropy
    /// otherwise.
    pub fn rng(seed: Option<u64>) -> DrawRng {
        match seed {
            Some(seed) => {
                log::debug!("using fixed RNG seed {seed}");
                DrawRng::seeded(seed)
            }
            None => DrawRng::from_entropy(),
        }
    }
}
