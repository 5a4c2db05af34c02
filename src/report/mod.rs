//! Frequency ranking and output
//!
//! This module provides:
//! - Ranked frequency tables with first-occurrence tie-breaking
//! - The padded export table and its CSV writer
//! - The console block of adjective cell statistics

pub mod console;
pub mod export;
pub mod frequency;
