//! The `scan` command: index the cards folder and report coverage.
//!
//! Prints one line per section showing how many of its slots have at least
//! one image, plus the front/back counts that bound a treasure draw.

use crate::core::{
    command_init::DeckCommandInit,
    error::{DeckNavigatorError, Result},
    get_colored_section, print_section_header, print_success, Section,
};
use colored::*;
use std::path::PathBuf;

pub fn execute_scan(cards_dir: Option<PathBuf>) -> Result<()> {
    let context = DeckCommandInit::initialize_allow_empty(cards_dir)?;
    if context.deck.is_empty() {
        return Err(DeckNavigatorError::no_cards_found(&context.folder));
    }

    print_section_header(&format!("Deck coverage for {}", context.folder.display()));

    for section in Section::ALL {
        let (first, last) = section.range();
        let total = last - first + 1;
        let present = context
            .deck
            .occupied_slots()
            .filter(|slot| (first..=last).contains(slot))
            .count();
        println!(
            "  {:<22} {} slots {first}-{last}",
            get_colored_section(section),
            format!("{present:>3}/{total}").white()
        );
    }

    let fronts = context.deck.available_fronts().len();
    let backs = context.deck.available_backs().len();
    let drawable = fronts >= 1 && backs >= 4;
    println!(
        "\n  {} item fronts, {} item backs {}",
        fronts.to_string().green(),
        backs.to_string().green(),
        if drawable {
            "(treasure draws available)".bright_black()
        } else {
            "(not enough for a treasure draw: need 1 front and 4 backs)".yellow()
        }
    );

    print_success(&format!(
        "Indexed {} slot(s) with images.",
        context.deck.len()
    ));

    Ok(())
}
