//! Common utilities for the selkie crates.
//!
//! This crate provides shared infrastructure used by the selector builder:
//! - **Warning System** - colored, deduplicated terminal output for inputs that
//!   are accepted but probably not what the caller meant

pub mod warning;
