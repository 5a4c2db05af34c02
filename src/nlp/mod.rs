//! Natural Language Processing components
//!
//! This module provides text normalization, stopword filtering and the
//! annotator capability that supplies lemmas and part-of-speech tags.

pub mod annotator;
#[cfg(feature = "nlprule")]
pub mod nlprule_tagger;
pub mod normalize;
pub mod stopwords;
