//! Consolidated test utilities for deck-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! focused on real card-folder scenarios built in temporary directories.

pub mod assertions;
pub mod fixtures;
