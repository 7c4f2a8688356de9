//! The `show` command: print one card view by slot or item number.
//!
//! `--item` routes through the navigator's item jump (front slot, back
//! fallback); `--item --back` addresses the item's paired back slot, one
//! above its front. `--slot` addresses a position directly. A requested back
//! face may be absent and is then shown as such.

use crate::core::{
    command_init::DeckCommandInit,
    error::Result,
    format_card_line, Deck, Navigator, Side, MIN_SLOT,
};
use std::path::PathBuf;

pub fn execute_show(
    cards_dir: Option<PathBuf>,
    slot: Option<u32>,
    item: Option<u32>,
    back: bool,
) -> Result<()> {
    let context = DeckCommandInit::initialize(cards_dir)?;

    let nav = resolve_position(&context.deck, slot, item, back)?;

    // view() validates the slot range for direct --slot addressing
    let view = nav.view(&context.deck)?;
    println!("\n{}\n", format_card_line(&view));

    Ok(())
}

/// Turn the `--slot`/`--item`/`--back` combination into a cursor position.
///
/// An item's back is its paired slot (front slot + 1), mirroring the
/// odd/even pairing `jump_to_item` uses for its fallback.
fn resolve_position(
    deck: &Deck,
    slot: Option<u32>,
    item: Option<u32>,
    back: bool,
) -> Result<Navigator> {
    let mut nav = Navigator::new();
    if let Some(item) = item {
        if back {
            nav.slot = deck.item_to_slot(item)? + 1;
            nav.side = Side::Back;
        } else {
            nav.jump_to_item(deck, item)?;
        }
    } else {
        nav.slot = slot.unwrap_or(MIN_SLOT);
        nav.side = if back { Side::Back } else { Side::Front };
    }
    Ok(nav)
}
