//! Random treasure composition.
//!
//! One draw is a single random item front plus four random back cards used as
//! decorative fill, the layout the physical "endless treasure" deck is drawn
//! with. Backs are not paired to the chosen front. Every call is an
//! independent uniform draw over the available images, so consecutive draws
//! may repeat slots.
//!
//! # Public API
//! - [`compose`]: Produce one [`TreasureDraw`] from a deck and RNG
//! - [`ComposeOptions`]: Whether backs may repeat within a single draw
//!
//! The original drawing program sampled its four backs without replacement
//! but never stated that as a rule, so the behavior is an option rather than
//! an assumption.

use crate::core::deck::{Deck, Side};
use crate::core::error::{DeckNavigatorError, Result};
use crate::core::rng::DrawRng;
use std::path::PathBuf;

/// Number of back cards in one treasure layout
pub const BACKS_PER_DRAW: usize = 4;

/// Tuning for a single draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// When true (default), the four backs of one draw are all distinct
    pub unique_backs: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self { unique_backs: true }
    }
}

/// One slot/path pick inside a draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnCard {
    pub slot: u32,
    pub path: PathBuf,
}

/// A complete five-image treasure layout
#[derive(Debug, Clone, PartialEq)]
pub struct TreasureDraw {
    pub front: DrawnCard,
    /// Item number of the drawn front, for the status line
    pub item_number: u32,
    pub backs: Vec<DrawnCard>,
}

/// Draw one treasure: a uniformly random front from the available item
/// fronts plus [`BACKS_PER_DRAW`] random backs.
///
/// Fails with `InsufficientCards` before picking anything when the deck
/// cannot satisfy the draw; no partial layout is ever produced.
pub fn compose(deck: &Deck, rng: &mut DrawRng, options: ComposeOptions) -> Result<TreasureDraw> {
    let fronts = deck.available_fronts();
    let backs = deck.available_backs();

    let backs_needed = if options.unique_backs {
        BACKS_PER_DRAW
    } else {
        1
    };
    if fronts.is_empty() || backs.len() < backs_needed {
        return Err(DeckNavigatorError::insufficient_cards(
            fronts.len(),
            backs.len(),
            backs_needed,
        ));
    }

    // Capacity was checked above; a None from a sampler means the check and
    // the samplers disagree, which must stay a rejected draw, never an empty one
    let back_slots = if options.unique_backs {
        rng.sample_distinct(&backs, BACKS_PER_DRAW)
    } else {
        rng.sample_with_replacement(&backs, BACKS_PER_DRAW)
    }
    .ok_or_else(|| {
        DeckNavigatorError::insufficient_cards(fronts.len(), backs.len(), backs_needed)
    })?;
    let front_slot = rng.choose(&fronts).copied().ok_or_else(|| {
        DeckNavigatorError::insufficient_cards(fronts.len(), backs.len(), backs_needed)
    })?;

    let front = drawn_card(deck, front_slot, Side::Front)?;
    let item_number = deck.item_number_of(front_slot).unwrap_or(0);
    let mut drawn_backs = Vec::with_capacity(BACKS_PER_DRAW);
    for slot in back_slots {
        drawn_backs.push(drawn_card(deck, slot, Side::Back)?);
    }

    log::debug!(
        "composed treasure: front {} (item {}), backs {:?}",
        front.slot,
        item_number,
        drawn_backs.iter().map(|b| b.slot).collect::<Vec<_>>()
    );

    Ok(TreasureDraw {
        front,
        item_number,
        backs: drawn_backs,
    })
}

fn drawn_card(deck: &Deck, slot: u32, side: Side) -> Result<DrawnCard> {
    // Slots come from available_fronts/backs, so the path is present
    let path = deck
        .card_at(slot, side)?
        .map(|p| p.to_path_buf())
        .ok_or(DeckNavigatorError::SlotOutOfRange { slot })?;
    Ok(DrawnCard { slot, path })
}
