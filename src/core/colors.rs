//! Unified color system for deck sections.
//!
//! One color per section, used everywhere a card line is printed so `scan`,
//! `show` and `browse` stay visually consistent.
//!
//! # Color Scheme
//! - **Instructions**: Cyan
//! - **Damage**: Red
//! - **DC**: Magenta
//! - **Misc**: Yellow
//! - **Items**: Green

use crate::core::deck::Section;
use crate::core::navigator::CardView;
use colored::*;

/// Color styling closure for a section
pub fn get_section_color_style(section: Section) -> Box<dyn Fn(&str) -> ColoredString> {
    match section {
        Section::Instructions => Box::new(|text: &str| text.cyan()),
        Section::Damage => Box::new(|text: &str| text.red()),
        Section::Dc => Box::new(|text: &str| text.magenta()),
        Section::Misc => Box::new(|text: &str| text.yellow()),
        Section::Items => Box::new(|text: &str| text.green()),
    }
}

/// Section label colored with its scheme color
pub fn get_colored_section(section: Section) -> ColoredString {
    let color_fn = get_section_color_style(section);
    color_fn(section.as_str())
}

/// One formatted card line: slot, side, section, item number and path.
///
/// ```text
/// [137] back   Items    item 59   cards/treasure_138.jpg
/// [  5] front  Instructions        (no image)
/// ```
pub fn format_card_line(view: &CardView) -> String {
    let slot = format!("[{:>3}]", view.slot).cyan().bold();
    let side = format!("{:<5}", view.side.as_str()).white();
    let section = format!("{:<12}", view.section.as_str());
    let section = get_section_color_style(view.section)(&section);
    let item = match view.item_number {
        Some(n) => format!("item {n:<3}").white(),
        None => "        ".white(),
    };
    let path = match &view.path {
        Some(p) => p.display().to_string().normal(),
        None => "(no image)".bright_black(),
    };
    format!("{slot} {side} {section} {item} {path}")
}
