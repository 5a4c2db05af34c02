//! Per-row analysis
//!
//! Pure with respect to shared state: a row and an annotator go in, the
//! row's per-stimulus contributions come out.

use crate::extract::adjectives::AdjectiveValidator;
use crate::extract::descriptions::DescriptionExtractor;
use crate::nlp::annotator::Annotator;
use crate::types::{ResponseRow, Stimulus};

/// What one response contributes to one stimulus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimulusContribution {
    pub tokens: Vec<String>,
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
    /// `None` when the adjective cell was missing, otherwise whether it
    /// produced at least one valid adjective
    pub adjective_cell: Option<bool>,
}

/// Contributions of one response row, indexed by stimulus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAnalysis {
    contributions: Vec<(Stimulus, StimulusContribution)>,
}

impl RowAnalysis {
    /// Analyze every stimulus of `row`.
    pub fn analyze<A: Annotator + ?Sized>(row: &ResponseRow, annotator: &A) -> Self {
        let extractor = DescriptionExtractor::new(annotator);
        let validator = AdjectiveValidator::new(annotator);

        let contributions = Stimulus::all()
            .map(|stimulus| {
                let response = row.response(stimulus);
                let description = response.and_then(|r| r.description.as_deref());
                let adjectives = response.and_then(|r| r.adjectives.as_deref());

                let terms = extractor.extract(description);
                let cell = validator.process_cell(adjectives);
                let adjective_cell = cell.as_ref().map(|c| c.is_valid());

                let contribution = StimulusContribution {
                    tokens: terms.tokens,
                    adjectives: cell.map(|c| c.adjectives).unwrap_or_default(),
                    nouns: terms.nouns,
                    adjective_cell,
                };
                (stimulus, contribution)
            })
            .collect();

        Self { contributions }
    }

    pub fn contribution(&self, stimulus: Stimulus) -> Option<&StimulusContribution> {
        self.contributions
            .iter()
            .find(|(s, _)| *s == stimulus)
            .map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stimulus, &StimulusContribution)> {
        self.contributions.iter().map(|(s, c)| (*s, c))
    }
}
