//! Term extraction from survey cells
//!
//! This module turns annotated text into the strings that get counted:
//! validated adjectives from adjective fields, content words and nouns
//! from descriptions.

pub mod adjectives;
pub mod descriptions;
