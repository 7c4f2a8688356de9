//! Stateful cursor over the deck.
//!
//! The navigator is the browsing model behind the `browse` and `show`
//! commands: one current slot and side, moved by prev/next, section jumps,
//! side flips, and direct item-number jumps.
//!
//! # Public API
//! - [`Navigator`]: Cursor state, serde-serializable and passed by value
//! - [`CardView`]: Display payload handed to the presentation layer
//!
//! # Invariants
//! - The slot always stays inside [1,220]; next/prev wrap across the deck
//!   ends so browsing never hits a terminal state.
//! - Section and item number are derived from the slot on every transition,
//!   never stored, so they cannot desynchronize.
//! - Failed requests (invalid item number) leave the cursor unchanged.

use crate::core::deck::{Deck, Section, Side, MAX_SLOT, MIN_SLOT};
use crate::core::error::Result;
use crate::core::rng::DrawRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cursor over the deck: current slot and which face is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    pub slot: u32,
    pub side: Side,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            slot: MIN_SLOT,
            side: Side::Front,
        }
    }
}

/// Everything the presentation layer needs to render the current card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub slot: u32,
    pub side: Side,
    pub section: Section,
    /// Blank for slots below the Items section
    pub item_number: Option<u32>,
    /// `None` when no image exists for this slot/side
    pub path: Option<PathBuf>,
}

impl Navigator {
    /// Cursor at slot 1, front side
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at a uniformly random in-range slot, front side
    pub fn random_start(rng: &mut DrawRng) -> Self {
        Self {
            slot: rng.gen_range(MIN_SLOT..=MAX_SLOT),
            side: Side::Front,
        }
    }

    /// Advance one slot; 220 wraps to 1. Crossing a section boundary lands on
    /// the next section's first slot for free, since sections tile the range.
    pub fn next(&mut self) {
        self.slot = if self.slot >= MAX_SLOT {
            MIN_SLOT
        } else {
            self.slot + 1
        };
    }

    /// Retreat one slot; 1 wraps to 220.
    pub fn prev(&mut self) {
        self.slot = if self.slot <= MIN_SLOT {
            MAX_SLOT
        } else {
            self.slot - 1
        };
    }

    /// Jump to the first slot of the current section
    pub fn first_in_section(&mut self, deck: &Deck) -> Result<()> {
        let section = deck.section_of(self.slot)?;
        self.slot = section.first_slot();
        Ok(())
    }

    /// Jump to the last slot of the current section
    pub fn last_in_section(&mut self, deck: &Deck) -> Result<()> {
        let section = deck.section_of(self.slot)?;
        self.slot = section.last_slot();
        Ok(())
    }

    /// Toggle the showing side, but only when the other side's image exists
    /// for the current slot. Otherwise the cursor is left unchanged.
    pub fn flip(&mut self, deck: &Deck) {
        let other = self.side.flipped();
        if deck.has_side(self.slot, other) {
            self.side = other;
        }
    }

    /// Jump to an item by its 1..=100 number. Lands on the item's front slot,
    /// falling back to the back slot when the front image is absent. An
    /// invalid number is rejected with the cursor unchanged.
    pub fn jump_to_item(&mut self, deck: &Deck, item: u32) -> Result<()> {
        let front_slot = deck.item_to_slot(item)?;
        let back_slot = front_slot + 1;
        if !deck.has_side(front_slot, Side::Front) && deck.has_side(back_slot, Side::Back) {
            self.slot = back_slot;
            self.side = Side::Back;
        } else {
            self.slot = front_slot;
            self.side = Side::Front;
        }
        Ok(())
    }

    /// Render the current position against the deck
    pub fn view(&self, deck: &Deck) -> Result<CardView> {
        Ok(CardView {
            slot: self.slot,
            side: self.side,
            section: deck.section_of(self.slot)?,
            item_number: deck.item_number_of(self.slot),
            path: deck
                .card_at(self.slot, self.side)?
                .map(|p| p.to_path_buf()),
        })
    }
}
