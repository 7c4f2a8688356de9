//! The `browse` command: interactive cursor session over stdin.
//!
//! Reads one command per line and prints the card view after every
//! transition, the CLI analogue of the browser tab's buttons:
//!
//! ```text
//! n          next slot (wraps 220 -> 1)
//! p          previous slot (wraps 1 -> 220)
//! f          first slot of the current section
//! l          last slot of the current section
//! b          flip to the other side (no-op when absent)
//! j <item>   jump to item 1..100
//! q          quit
//! ```
//!
//! Rejected requests (bad item number, unknown command) print an error and
//! leave the cursor where it was; the session never aborts on them.

use crate::core::{
    command_init::{DeckCommandContext, DeckCommandInit},
    error::{DeckNavigatorError, Result},
    format_card_line, print_error, print_info, Deck, Navigator,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub fn execute_browse(
    cards_dir: Option<PathBuf>,
    seed: Option<u64>,
    random_start: bool,
) -> Result<()> {
    let context = DeckCommandInit::initialize(cards_dir)?;

    let mut nav = if random_start {
        let mut rng = DeckCommandContext::rng(seed);
        Navigator::random_start(&mut rng)
    } else {
        Navigator::new()
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print_info("Browsing deck. Commands: n, p, f, l, b, j <item>, q");
    println!("{}", format_card_line(&nav.view(&context.deck)?));

    for line in stdin.lock().lines() {
        let line = line?;
        match apply_browse_command(&mut nav, &context.deck, &line) {
            Ok(BrowseStep::Continue) => {
                println!("{}", format_card_line(&nav.view(&context.deck)?));
            }
            Ok(BrowseStep::Quit) => break,
            Ok(BrowseStep::Noop) => {}
            Err(e) => print_error(&e.to_string()),
        }
        stdout.flush()?;
    }

    Ok(())
}

/// Outcome of one parsed browse input line
#[derive(Debug, PartialEq, Eq)]
pub enum BrowseStep {
    Continue,
    Noop,
    Quit,
}

/// Apply a single browse input line to the cursor.
///
/// Split out of the stdin loop so the transition table is unit testable.
pub fn apply_browse_command(nav: &mut Navigator, deck: &Deck, input: &str) -> Result<BrowseStep> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(BrowseStep::Noop);
    }

    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    match (command, parts.next()) {
        ("n", None) => nav.next(),
        ("p", None) => nav.prev(),
        ("f", None) => nav.first_in_section(deck)?,
        ("l", None) => nav.last_in_section(deck)?,
        ("b", None) => nav.flip(deck),
        ("j", Some(arg)) => {
            let item: u32 = arg
                .parse()
                .map_err(|_| DeckNavigatorError::unknown_browse_command(input))?;
            nav.jump_to_item(deck, item)?;
        }
        ("q", None) => return Ok(BrowseStep::Quit),
        _ => return Err(DeckNavigatorError::unknown_browse_command(input)),
    }
    Ok(BrowseStep::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::{Deck, Side, SlotPaths};
    use std::collections::BTreeMap;

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
    fn test_browse_next_prev() {
        let deck = deck_with(&[(21, Side::Front)]);
        let mut nav = Navigator::new();
        assert_eq!(
            apply_browse_command(&mut nav, &deck, "n").unwrap(),
            BrowseStep::Continue
        );
        assert_eq!(nav.slot, 2);
        apply_browse_command(&mut nav, &deck, "p").unwrap();
        apply_browse_command(&mut nav, &deck, "p").unwrap();
        assert_eq!(nav.slot, 220);
    }

    #[test]
    fn test_browse_section_jumps() {
        let deck = deck_with(&[]);
        let mut nav = Navigator { slot: 18, side: Side::Front };
        apply_browse_command(&mut nav, &deck, "f").unwrap();
        assert_eq!(nav.slot, 17);
        apply_browse_command(&mut nav, &deck, "l").unwrap();
        assert_eq!(nav.slot, 20);
    }

    #[test]
    fn test_browse_jump_to_item() {
        let deck = deck_with(&[(23, Side::Front)]);
        let mut nav = Navigator::new();
        apply_browse_command(&mut nav, &deck, "j 2").unwrap();
        assert_eq!(nav.slot, 23);
    }

    #[test]
    fn test_browse_invalid_item_keeps_cursor() {
        let deck = deck_with(&[]);
        let mut nav = Navigator { slot: 42, side: Side::Front };
        assert!(apply_browse_command(&mut nav, &deck, "j 200").is_err());
        assert_eq!(nav.slot, 42);
    }

    #[test]
    fn test_browse_quit_and_blank() {
        let deck = deck_with(&[]);
        let mut nav = Navigator::new();
        assert_eq!(
            apply_browse_command(&mut nav, &deck, "q").unwrap(),
            BrowseStep::Quit
        );
        assert_eq!(
            apply_browse_command(&mut nav, &deck, "   ").unwrap(),
            BrowseStep::Noop
        );
    }

    #[test]
    fn test_browse_unknown_command() {
        let deck = deck_with(&[]);
        let mut nav = Navigator::new();
        assert!(apply_browse_command(&mut nav, &deck, "zzz").is_err());
        assert!(apply_browse_command(&mut nav, &deck, "j abc").is_err());
        assert!(apply_browse_command(&mut nav, &deck, "n 5").is_err());
    }

    #[test]
    fn test_browse_flip_noop_keeps_side() {
        let deck = deck_with(&[(21, Side::Front)]);
        let mut nav = Navigator { slot: 21, side: Side::Front };
        apply_browse_command(&mut nav, &deck, "b").unwrap();
        assert_eq!(nav.side, Side::Front);
    }
}
