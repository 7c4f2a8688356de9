//! Immutable deck model with section and item semantics.
//!
//! This module wraps the indexer's output in read-only queries. A deck is built
//! once per scan and never mutated afterwards, so it can be shared freely
//! between the navigator and the treasure composer.
//!
//! # Public API
//! - [`Deck`]: Slot-indexed card collection with section/item queries
//! - [`Section`]: The five named slot ranges of the physical deck
//! - [`Side`]: Front or back of a slot
//!
//! # Slot Layout
//! A slot is the literal trailing number of a card file, 1..=220. Odd numbers
//! are fronts, even numbers are backs. The Items section additionally carries
//! a derived item numbering: item i (1..=100) has its front at slot
//! `21 + 2*(i-1)` and its back one slot above.

use crate::core::error::{DeckNavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// First valid slot number
pub const MIN_SLOT: u32 = 1;
/// Last valid slot number
pub const MAX_SLOT: u32 = 220;
/// First slot of the Items section
pub const ITEMS_START: u32 = 21;
/// Number of items in the Items section (two slots per item)
pub const ITEM_COUNT: u32 = 100;

/// Which face of a card slot to address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    /// The opposite face
    pub fn flipped(self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }

    /// Lowercase label for display
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }

    /// The side a literal trailing number belongs to: odd front, even back
    pub fn of_number(number: u32) -> Side {
        if number % 2 == 1 {
            Side::Front
        } else {
            Side::Back
        }
    }
}

/// Named contiguous slot ranges of the deck, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Instructions,
    Damage,
    Dc,
    Misc,
    Items,
}

impl Section {
    /// All sections in ascending slot order
    pub const ALL: [Section; 5] = [
        Section::Instructions,
        Section::Damage,
        Section::Dc,
        Section::Misc,
        Section::Items,
    ];

    /// Inclusive slot range covered by this section
    pub fn range(self) -> (u32, u32) {
        match self {
            Section::Instructions => (1, 12),
            Section::Damage => (13, 14),
            Section::Dc => (15, 16),
            Section::Misc => (17, 20),
            Section::Items => (21, 220),
        }
    }

    /// First slot of the section
    pub fn first_slot(self) -> u32 {
        self.range().0
    }

    /// Last slot of the section
    pub fn last_slot(self) -> u32 {
        self.range().1
    }

    /// Display label
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Instructions => "Instructions",
            Section::Damage => "Damage",
            Section::Dc => "DC",
            Section::Misc => "Misc",
            Section::Items => "Items",
        }
    }
}

/// The file paths present for one slot. Presence of each side is independent;
/// for numbered files the parity of the slot determines which side can exist,
/// but the slot-1 alias may fill both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPaths {
    pub front: Option<PathBuf>,
    pub back: Option<PathBuf>,
}

impl SlotPaths {
    /// Path for the requested side, if present
    pub fn side(&self, side: Side) -> Option<&Path> {
        match side {
            Side::Front => self.front.as_deref(),
            Side::Back => self.back.as_deref(),
        }
    }
}

/// Read-only deck built from an indexed card directory
#[derive(Debug, Clone, Default)]
pub struct Deck {
    slots: BTreeMap<u32, SlotPaths>,
}

impl Deck {
    /// Build a deck from a slot map. Slots outside [1,220] are rejected by the
    /// indexer before this point.
    pub fn new(slots: BTreeMap<u32, SlotPaths>) -> Self {
        Self { slots }
    }

    /// Number of slots with at least one image present
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no card image was indexed
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check_slot(slot: u32) -> Result<()> {
        if (MIN_SLOT..=MAX_SLOT).contains(&slot) {
            Ok(())
        } else {
            Err(DeckNavigatorError::slot_out_of_range(slot))
        }
    }

    /// File path for one face of a slot, `None` when that image is absent
    pub fn card_at(&self, slot: u32, side: Side) -> Result<Option<&Path>> {
        Self::check_slot(slot)?;
        Ok(self.slots.get(&slot).and_then(|paths| paths.side(side)))
    }

    /// True when the given face of the slot has an image
    pub fn has_side(&self, slot: u32, side: Side) -> bool {
        matches!(self.card_at(slot, side), Ok(Some(_)))
    }

    /// Section containing the slot. Total over [1,220].
    pub fn section_of(&self, slot: u32) -> Result<Section> {
        Self::check_slot(slot)?;
        let section = Section::ALL
            .into_iter()
            .find(|s| {
                let (first, last) = s.range();
                (first..=last).contains(&slot)
            })
            .unwrap_or(Section::Items);
        Ok(section)
    }

    /// Derived item number for a slot, `None` below the Items section.
    /// Both faces of an item map to the same number (21 and 22 are item 1).
    pub fn item_number_of(&self, slot: u32) -> Option<u32> {
        if !(ITEMS_START..=MAX_SLOT).contains(&slot) {
            return None;
        }
        Some((slot - ITEMS_START) / 2 + 1)
    }

    /// Front slot of an item number. Inverse of [`Self::item_number_of`].
    pub fn item_to_slot(&self, item: u32) -> Result<u32> {
        if !(1..=ITEM_COUNT).contains(&item) {
            return Err(DeckNavigatorError::invalid_item(item));
        }
        Ok(ITEMS_START + 2 * (item - 1))
    }

    /// Sorted Items-section slots with a front image present
    pub fn available_fronts(&self) -> Vec<u32> {
        self.available_sides(Side::Front)
    }

    /// Sorted Items-section slots with a back image present
    pub fn available_backs(&self) -> Vec<u32> {
        self.available_sides(Side::Back)
    }

    fn available_sides(&self, side: Side) -> Vec<u32> {
        self.slots
            .range(ITEMS_START..=MAX_SLOT)
            .filter(|(_, paths)| paths.side(side).is_some())
            .map(|(&slot, _)| slot)
            .collect()
    }

    /// Slots with any image, in ascending order. Used by the scan summary.
    pub fn occupied_slots(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_with(slots: &[(u32, Side)]) -> Deck {
        let mut map: BTreeMap<u32, SlotPaths> = BTreeMap::new();
        for &(slot, side) in slots {
            let entry = map.entry(slot).or_default();
            let path = PathBuf::from(format!("card_{slot}.jpg"));
            match side {
                Side::Front => entry.front = Some(path),
                Side::Back => entry.back = Some(path),
            }
        }
        Deck::new(map)
    }

    #[test]
    fn test_every_slot_has_exactly_one_section() {
        let deck = Deck::default();
        for slot in MIN_SLOT..=MAX_SLOT {
            let section = deck.section_of(slot).unwrap();
            let covering = Section::ALL
                .into_iter()
                .filter(|s| {
                    let (first, last) = s.range();
                    (first..=last).contains(&slot)
                })
                .count();
            assert_eq!(covering, 1, "slot {slot} covered {covering} times");
            let (first, last) = section.range();
            assert!((first..=last).contains(&slot));
        }
    }

    #[test]
    fn test_sections_tile_the_slot_range() {
        let mut next = MIN_SLOT;
        for section in Section::ALL {
            let (first, last) = section.range();
            assert_eq!(first, next, "{} starts at {first}", section.as_str());
            next = last + 1;
        }
        assert_eq!(next, MAX_SLOT + 1);
    }

    #[test]
    fn test_section_of_rejects_out_of_range() {
        let deck = Deck::default();
        assert!(deck.section_of(0).is_err());
        assert!(deck.section_of(221).is_err());
    }

    #[test]
    fn test_item_round_trip() {
        let deck = Deck::default();
        for item in 1..=ITEM_COUNT {
            let slot = deck.item_to_slot(item).unwrap();
            assert_eq!(deck.item_number_of(slot), Some(item));
            // The paired back maps to the same item
            assert_eq!(deck.item_number_of(slot + 1), Some(item));
        }
    }

    #[test]
    fn test_item_boundary_slots() {
        let deck = Deck::default();
        assert_eq!(deck.item_to_slot(1).unwrap(), 21);
        assert_eq!(deck.item_to_slot(2).unwrap(), 23);
        assert_eq!(deck.item_to_slot(100).unwrap(), 219);
    }

    #[test]
    fn test_item_number_blank_below_items_section() {
        let deck = Deck::default();
        for slot in MIN_SLOT..ITEMS_START {
            assert_eq!(deck.item_number_of(slot), None);
        }
        assert_eq!(deck.item_number_of(ITEMS_START), Some(1));
    }

    #[test]
    fn test_item_to_slot_rejects_invalid() {
        let deck = Deck::default();
        assert!(deck.item_to_slot(0).is_err());
        assert!(deck.item_to_slot(101).is_err());
    }

    #[test]
    fn test_card_at_absent_side() {
        let deck = deck_with(&[(21, Side::Front)]);
        assert!(deck.card_at(21, Side::Front).unwrap().is_some());
        assert!(deck.card_at(21, Side::Back).unwrap().is_none());
        assert!(deck.card_at(22, Side::Back).unwrap().is_none());
    }

    #[test]
    fn test_card_at_out_of_range() {
        let deck = deck_with(&[(21, Side::Front)]);
        assert!(deck.card_at(0, Side::Front).is_err());
        assert!(deck.card_at(500, Side::Front).is_err());
    }

    #[test]
    fn test_available_fronts_and_backs_ignore_lower_sections() {
        let deck = deck_with(&[
            (3, Side::Front),
            (14, Side::Back),
            (21, Side::Front),
            (22, Side::Back),
            (219, Side::Front),
            (220, Side::Back),
        ]);
        assert_eq!(deck.available_fronts(), vec![21, 219]);
        assert_eq!(deck.available_backs(), vec![22, 220]);
    }

    #[test]
    fn test_side_of_number_parity() {
        assert_eq!(Side::of_number(21), Side::Front);
        assert_eq!(Side::of_number(22), Side::Back);
        assert_eq!(Side::Front.flipped(), Side::Back);
        assert_eq!(Side::Back.flipped(), Side::Front);
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert!(deck.available_fronts().is_empty());
    }
}
