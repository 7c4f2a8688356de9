//! Test data generation utilities and predefined card folders
//!
//! Provides functions for creating temporary folders with numbered dummy
//! JPG files to test indexing, browsing and drawing scenarios consistently.
//! The files contain no real image data; the tool treats paths as opaque.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// Temporary cards folder kept alive for the duration of a test
pub struct CardsFolder {
    pub temp_dir: TempDir,
}

impl CardsFolder {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path_str(&self) -> String {
        self.temp_dir.path().display().to_string()
    }
}

/// Create an empty folder with no card files
pub fn empty_folder() -> anyhow::Result<CardsFolder> {
    Ok(CardsFolder {
        temp_dir: TempDir::new()?,
    })
}

/// Create a folder containing dummy JPGs with the given trailing numbers
pub fn folder_with_numbers(numbers: &[u32]) -> anyhow::Result<CardsFolder> {
    let folder = empty_folder()?;
    for n in numbers {
        create_card(folder.path(), &format!("EndlessTreasure_{n}.jpg"))?;
    }
    Ok(folder)
}

/// Create a named dummy file in the folder
pub fn create_card(dir: &Path, name: &str) -> anyhow::Result<()> {
    std::fs::write(dir.join(name), b"not a real jpg")?;
    Ok(())
}

/// Scenario: enough item cards for treasure draws
/// (fronts 21,23,25,27 and backs 22,24,26,28,30)
pub fn drawable_folder() -> anyhow::Result<CardsFolder> {
    folder_with_numbers(&[21, 22, 23, 24, 25, 26, 27, 28, 30])
}

/// Scenario: item cards present but only three backs, so draws must fail
pub fn short_backs_folder() -> anyhow::Result<CardsFolder> {
    folder_with_numbers(&[21, 22, 24, 26])
}

/// Scenario: the unnumbered-first-card alias pair and nothing numbered "1"
pub fn alias_folder() -> anyhow::Result<CardsFolder> {
    let folder = empty_folder()?;
    create_card(folder.path(), "Cards.jpg")?;
    create_card(folder.path(), "Cards2.jpg")?;
    Ok(folder)
}

/// Scenario: a few cards across every section
pub fn spanning_folder() -> anyhow::Result<CardsFolder> {
    folder_with_numbers(&[1, 2, 13, 15, 17, 21, 22, 24, 26, 28, 219, 220])
}
