//! The `draw` command: one random treasure composition.
//!
//! Prints the five-image layout the tabletop draw uses: one random item
//! front plus four random backs. `--repeats` allows duplicate backs within
//! the draw; `--seed` (global) makes the draw reproducible.

use crate::core::{
    command_init::{DeckCommandContext, DeckCommandInit},
    compose,
    error::Result,
    print_success, ComposeOptions,
};
use colored::*;
use std::path::PathBuf;

pub fn execute_draw(
    cards_dir: Option<PathBuf>,
    seed: Option<u64>,
    allow_repeats: bool,
) -> Result<()> {
    let context = DeckCommandInit::initialize(cards_dir)?;
    let mut rng = DeckCommandContext::rng(seed);
    let options = ComposeOptions {
        unique_backs: !allow_repeats,
    };

    let draw = compose(&context.deck, &mut rng, options)?;

    println!("\n{}", "Treasure draw:".white());
    println!(
        "  {} item {:<3} slot {:<3} {}",
        "front".green().bold(),
        draw.item_number,
        draw.front.slot,
        draw.front.path.display()
    );
    for (i, back) in draw.backs.iter().enumerate() {
        println!(
            "  {}  #{}       slot {:<3} {}",
            "back".cyan(),
            i + 1,
            back.slot,
            back.path.display()
        );
    }

    print_success(&format!(
        "Drew item {} with {} back card(s).",
        draw.item_number,
        draw.backs.len()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn folder_with(numbers: &[u32]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for n in numbers {
            std::fs::write(tmp.path().join(format!("treasure_{n}.jpg")), b"jpg").unwrap();
        }
        tmp
    }

    #[test]
    fn test_draw_with_enough_cards() {
        let tmp = folder_with(&[21, 22, 24, 26, 28]);
        assert!(execute_draw(Some(tmp.path().to_path_buf()), Some(42), false).is_ok());
    }

    #[test]
    fn test_draw_too_few_backs_is_advisory() {
        let tmp = folder_with(&[21, 22, 24]);
        let result = execute_draw(Some(tmp.path().to_path_buf()), Some(42), false);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Not enough card images"));
    }

    #[test]
    fn test_draw_with_repeats_needs_single_back() {
        let tmp = folder_with(&[21, 22]);
        assert!(execute_draw(Some(tmp.path().to_path_buf()), Some(42), true).is_ok());
    }

    #[test]
    fn test_draw_empty_folder_advises() {
        let tmp = TempDir::new().unwrap();
        let result = execute_draw(Some(tmp.path().to_path_buf()), None, false);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No card images found"));
    }
}
