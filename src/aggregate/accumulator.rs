//! Running aggregates for the survey fold

use super::row::{RowAnalysis, StimulusContribution};
use crate::report::frequency::FrequencyCounter;
use crate::types::{AnalysisConfig, ItemKind, Stimulus};

/// Adjective cell counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjectiveCellStats {
    /// Non-empty adjective cells
    pub cells: usize,
    /// Cells that yielded at least one valid adjective
    pub valid_cells: usize,
}

impl AdjectiveCellStats {
    pub fn record(&mut self, valid: bool) {
        self.cells += 1;
        if valid {
            self.valid_cells += 1;
        }
    }
}

/// Word, adjective and noun counts plus cell statistics for one scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimulusAccumulator {
    pub tokens: FrequencyCounter,
    pub adjectives: FrequencyCounter,
    pub nouns: FrequencyCounter,
    pub stats: AdjectiveCellStats,
}

impl StimulusAccumulator {
    pub fn absorb(&mut self, contribution: &StimulusContribution) {
        self.tokens.extend(&contribution.tokens);
        self.adjectives.extend(&contribution.adjectives);
        self.nouns.extend(&contribution.nouns);
        if let Some(valid) = contribution.adjective_cell {
            self.stats.record(valid);
        }
    }

    pub fn counter(&self, kind: ItemKind) -> &FrequencyCounter {
        match kind {
            ItemKind::Free => &self.tokens,
            ItemKind::Adjective => &self.adjectives,
            ItemKind::Noun => &self.nouns,
        }
    }
}

/// Result of folding every row: one accumulator per stimulus and the
/// overall roll-up without the excluded stimulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyAggregate {
    config: AnalysisConfig,
    stimuli: Vec<StimulusAccumulator>,
    overall: StimulusAccumulator,
    rows: usize,
}

impl SurveyAggregate {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            config: config.clone(),
            stimuli: Stimulus::all().map(|_| StimulusAccumulator::default()).collect(),
            overall: StimulusAccumulator::default(),
            rows: 0,
        }
    }

    /// Fold one analyzed row in.
    pub fn absorb(mut self, analysis: RowAnalysis) -> Self {
        for (stimulus, contribution) in analysis.iter() {
            self.stimuli[stimulus.index()].absorb(contribution);
            if self.config.includes_in_overall(stimulus) {
                self.overall.absorb(contribution);
            }
        }
        self.rows += 1;
        self
    }

    pub fn stimulus(&self, stimulus: Stimulus) -> &StimulusAccumulator {
        &self.stimuli[stimulus.index()]
    }

    /// Accumulators in questionnaire order.
    pub fn stimuli(&self) -> impl Iterator<Item = (Stimulus, &StimulusAccumulator)> {
        Stimulus::all().zip(self.stimuli.iter())
    }

    pub fn overall(&self) -> &StimulusAccumulator {
        &self.overall
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Number of rows folded in
    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(tokens: &[&str], adjective_cell: Option<bool>) -> StimulusContribution {
        StimulusContribution {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            adjectives: Vec::new(),
            nouns: Vec::new(),
            adjective_cell,
        }
    }

    #[test]
    fn test_cell_stats_record() {
        let mut stats = AdjectiveCellStats::default();
        stats.record(true);
        stats.record(false);
        assert_eq!(stats, AdjectiveCellStats { cells: 2, valid_cells: 1 });
    }

    #[test]
    fn test_accumulator_skips_missing_cells() {
        let mut acc = StimulusAccumulator::default();
        acc.absorb(&contribution(&["lake"], None));
        acc.absorb(&contribution(&["lake", "tree"], Some(false)));

        assert_eq!(acc.stats, AdjectiveCellStats { cells: 1, valid_cells: 0 });
        assert_eq!(acc.counter(ItemKind::Free).count("lake"), 2);
        assert!(acc.counter(ItemKind::Adjective).is_empty());
    }

    #[test]
    fn test_new_aggregate_is_empty() {
        let aggregate = SurveyAggregate::new(&AnalysisConfig::default());
        assert_eq!(aggregate.rows(), 0);
        assert_eq!(aggregate.stimuli().count(), 6);
        assert!(aggregate.overall().tokens.is_empty());
    }
}
