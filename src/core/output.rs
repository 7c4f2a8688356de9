//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Standardized formatting functions for all deck-navigator output: errors,
//! advisories and section headers share one visual style across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for usage, bright_black for hints
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **No panics**: Every failure is a rendered message with a retry path

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error with structured usage information.
///
/// Used for the recoverable advisory cases (bad `--cards` path, empty
/// folder): the message names the problem, the usage lines name the retry.
pub fn print_error_with_structured_usage(
    message: &str,
    usage_patterns: &[&str],
    options: &[(&str, &str)],
) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());

    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    if !options.is_empty() {
        println!("\n{}", "Options:".blue());
        for (flag, description) in options {
            println!("  {}  {}", flag.bright_black(), description.bright_black());
        }
    }

    println!();
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_error_with_structured_usage_does_not_panic() {
        print_error_with_structured_usage(
            "No card images found",
            &["deck-navigator --cards <DIR> scan"],
            &[("--cards <DIR>", "folder containing the card JPGs")],
        );
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Indexed 220 slots");
    }

    #[test]
    fn test_print_info_and_header_do_not_panic() {
        print_info("Information message");
        print_section_header("Deck coverage");
    }
}
