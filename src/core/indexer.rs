//! Directory scanning and slot index construction.
//!
//! This module builds the slot map a [`Deck`](crate::core::deck::Deck) wraps.
//! Scanning is a single bounded directory listing done synchronously at
//! startup or on an explicit reindex; nothing is written to disk.
//!
//! # Public API
//! - [`scan_cards`]: Scan a directory into a [`Deck`]
//!
//! # Indexing Rules
//! - Only `.jpg`/`.jpeg` files with a trailing number in [1,220] are indexed;
//!   odd numbers become fronts, even numbers backs of that literal slot.
//! - Entries are processed in file-name order, first path wins on a
//!   duplicate slot/side.
//! - Slot-1 alias: when no file is explicitly numbered "1", an unnumbered
//!   JPEG whose stem plus "2" names a sibling JPEG is treated as slot 1
//!   front, and that sibling as slot 1 back.
//! - A missing or unreadable directory is an error; a readable directory
//!   with zero indexable files yields an empty deck, which callers surface
//!   as an advisory, not a crash.

use crate::core::deck::{Deck, Side, SlotPaths, MAX_SLOT, MIN_SLOT};
use crate::core::error::{DeckNavigatorError, Result};
use crate::core::filename::{jpeg_stem, parse_trailing_number};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Scan `dir` and build an immutable deck from the card images found there.
///
/// This is also the `reindex` entry point: scanning a new directory simply
/// produces a new deck, the old one is dropped by the caller.
pub fn scan_cards(dir: &Path) -> Result<Deck> {
    if !dir.exists() {
        return Err(DeckNavigatorError::directory_not_found(dir));
    }
    if !dir.is_dir() {
        return Err(DeckNavigatorError::directory_not_found(dir));
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| DeckNavigatorError::directory_unreadable(dir, e))?;

    // Name-sorted for deterministic first-wins duplicate handling
    let mut file_names: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DeckNavigatorError::directory_unreadable(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            file_names.push((name.to_string(), path));
        }
    }
    file_names.sort();

    let mut slots: BTreeMap<u32, SlotPaths> = BTreeMap::new();
    let mut unnumbered: Vec<(String, PathBuf)> = Vec::new();

    for (name, path) in &file_names {
        let Some(stem) = jpeg_stem(name) else {
            log::debug!("skipping non-jpeg file: {name}");
            continue;
        };
        match parse_trailing_number(name) {
            Some(number) if (MIN_SLOT..=MAX_SLOT).contains(&number) => {
                insert_side(&mut slots, number, Side::of_number(number), path);
            }
            Some(number) => {
                log::debug!("skipping {name}: number {number} outside 1-220");
            }
            None => {
                unnumbered.push((stem.to_string(), path.clone()));
            }
        }
    }

    apply_slot_one_alias(&mut slots, &unnumbered, &file_names);

    let deck = Deck::new(slots);
    log::info!(
        "indexed {} slot(s) from {} ({} item fronts, {} item backs)",
        deck.len(),
        dir.display(),
        deck.available_fronts().len(),
        deck.available_backs().len()
    );
    Ok(deck)
}

fn insert_side(slots: &mut BTreeMap<u32, SlotPaths>, slot: u32, side: Side, path: &Path) {
    let entry = slots.entry(slot).or_default();
    let target = match side {
        Side::Front => &mut entry.front,
        Side::Back => &mut entry.back,
    };
    if target.is_none() {
        *target = Some(path.to_path_buf());
    } else {
        log::debug!(
            "duplicate image for slot {slot} {}: keeping earlier file, ignoring {}",
            side.as_str(),
            path.display()
        );
    }
}

/// Resolve the unnumbered-first-card special case.
///
/// Applies only when no file claimed slot 1 explicitly: an unnumbered JPEG
/// whose stem plus "2" exists as a sibling JPEG becomes slot 1 front, and the
/// "2"-suffixed sibling slot 1 back (replacing its literal slot-2 reading).
fn apply_slot_one_alias(
    slots: &mut BTreeMap<u32, SlotPaths>,
    unnumbered: &[(String, PathBuf)],
    file_names: &[(String, PathBuf)],
) {
    let slot_one_taken = slots.get(&1).map_or(false, |p| p.front.is_some());
    if slot_one_taken {
        return;
    }

    for (stem, path) in unnumbered {
        let sibling_stem = format!("{stem}2");
        let sibling = file_names.iter().find(|(name, _)| {
            jpeg_stem(name).map_or(false, |s| s == sibling_stem)
        });
        let Some((sibling_name, sibling_path)) = sibling else {
            continue;
        };

        log::debug!(
            "aliasing unnumbered {} to slot 1 front, {} to slot 1 back",
            path.display(),
            sibling_name
        );
        let entry = slots.entry(1).or_default();
        entry.front = Some(path.clone());
        entry.back = Some(sibling_path.clone());

        // The sibling no longer counts as a literal slot-2 back
        if let Some(two) = slots.get_mut(&2) {
            if two.back.as_deref() == Some(sibling_path.as_path()) {
                two.back = None;
                if two.front.is_none() && two.back.is_none() {
                    slots.remove(&2);
                }
            }
        }
        return;
    }
}
