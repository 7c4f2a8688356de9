use clap::{Parser, Subcommand};
use deck_navigator::commands::*;
use deck_navigator::core::{
    error::{DeckNavigatorError, Result},
    print_error, print_error_with_structured_usage,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deck-navigator")]
#[command(about = "Browse and randomly draw from a numbered card-image deck")]
#[command(version = "0.1.0")]
struct Cli {
    /// Folder containing the card JPGs (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    cards: Option<PathBuf>,

    /// Fix the random seed for reproducible draws
    #[arg(long, global = true, value_name = "N")]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the cards folder and show per-section coverage
    Scan,
    /// Show one card by slot or item number
    Show {
        /// Slot number 1-220
        #[arg(long, conflicts_with = "item")]
        slot: Option<u32>,
        /// Item number 1-100 (Items section)
        #[arg(long)]
        item: Option<u32>,
        /// Show the back side instead of the front
        #[arg(long)]
        back: bool,
    },
    /// Draw a random treasure: one item front plus four back cards
    Draw {
        /// Allow the same back card to repeat within one draw
        #[arg(long)]
        repeats: bool,
    },
    /// Browse the deck interactively (n/p/f/l/b/j <item>/q on stdin)
    Browse {
        /// Start at a random slot instead of slot 1
        #[arg(long)]
        random: bool,
    },
}

fn main() -> Result<()> {
    // Accept -? as a help alias alongside --help
    let args = env::args().map(|a| if a == "-?" { "--help".to_string() } else { a });
    let cli = Cli::parse_from(args);

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Scan => execute_scan(cli.cards),
        Commands::Show { slot, item, back } => execute_show(cli.cards, slot, item, back),
        Commands::Draw { repeats } => execute_draw(cli.cards, cli.seed, repeats),
        Commands::Browse { random } => execute_browse(cli.cards, cli.seed, random),
    };

    if let Err(e) = result {
        render_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

/// Every error is a rendered message, never a panic. The folder problems get
/// the structured advisory telling the user how to re-point `--cards`.
fn render_error(error: &DeckNavigatorError) {
    match error {
        DeckNavigatorError::DirectoryNotFound { .. }
        | DeckNavigatorError::DirectoryUnreadable { .. }
        | DeckNavigatorError::NoCardsFound { .. } => {
            print_error_with_structured_usage(
                &error.to_string(),
                &[
                    "deck-navigator --cards <DIR> scan",
                    "deck-navigator --cards <DIR> draw",
                ],
                &[(
                    "--cards <DIR>",
                    "folder with JPGs whose filenames end in a number 1-220",
                )],
            );
        }
        _ => print_error(&error.to_string()),
    }
}
