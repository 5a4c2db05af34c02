//! Adjective validation
//!
//! A candidate is accepted as a unit: every alphabetic token in it must be
//! tagged as an adjective. Candidates without alphabetic tokens are dropped.

use crate::nlp::annotator::Annotator;
use crate::nlp::normalize::{normalize_cell, split_candidates};

/// Validated adjectives from one adjective cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjectiveCell {
    pub adjectives: Vec<String>,
}

impl AdjectiveCell {
    /// A cell counts as valid when at least one candidate survived.
    pub fn is_valid(&self) -> bool {
        !self.adjectives.is_empty()
    }
}

/// Splits adjective fields into candidates and validates them
#[derive(Debug, Clone, Copy)]
pub struct AdjectiveValidator<'a, A: ?Sized> {
    annotator: &'a A,
}

impl<'a, A: Annotator + ?Sized> AdjectiveValidator<'a, A> {
    pub fn new(annotator: &'a A) -> Self {
        Self { annotator }
    }

    /// Canonical (lemmatized, space-joined) form of a valid candidate.
    pub fn validate(&self, candidate: &str) -> Option<String> {
        let tokens = self.annotator.annotate(candidate);
        let alphabetic: Vec<_> = tokens.iter().filter(|t| t.is_alpha).collect();

        if alphabetic.is_empty() || !alphabetic.iter().all(|t| t.pos.is_adjective()) {
            return None;
        }

        Some(
            alphabetic
                .iter()
                .map(|t| t.lemma.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Process a raw adjective cell.
    ///
    /// Returns `None` for a missing or blank cell, which is not counted as
    /// processed. Otherwise returns the validated adjectives in field order.
    pub fn process_cell(&self, raw: Option<&str>) -> Option<AdjectiveCell> {
        let field = normalize_cell(raw)?;
        let adjectives = split_candidates(&field)
            .iter()
            .filter_map(|candidate| self.validate(candidate))
            .collect();
        Some(AdjectiveCell { adjectives })
    }
}
