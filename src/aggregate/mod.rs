//! Per-stimulus and overall aggregation
//!
//! Rows are analyzed independently into [`RowAnalysis`] values and then
//! folded, in row order, into a [`SurveyAggregate`]. Only the fold touches
//! shared state, so the analysis step may run on a thread pool without
//! changing first-occurrence order.

pub mod accumulator;
pub mod row;

pub use accumulator::{AdjectiveCellStats, StimulusAccumulator, SurveyAggregate};
pub use row::{RowAnalysis, StimulusContribution};

use rayon::prelude::*;
use tracing::debug;

use crate::nlp::annotator::Annotator;
use crate::types::{AnalysisConfig, ResponseRow};

/// Analyze and fold rows one after another.
pub fn aggregate_rows<A: Annotator + ?Sized>(
    rows: &[ResponseRow],
    annotator: &A,
    config: &AnalysisConfig,
) -> SurveyAggregate {
    rows.iter()
        .map(|row| RowAnalysis::analyze(row, annotator))
        .fold(SurveyAggregate::new(config), SurveyAggregate::absorb)
}

/// Analyze rows on the rayon pool, then fold them in row order.
///
/// Produces the same aggregate as [`aggregate_rows`].
pub fn aggregate_rows_parallel<A: Annotator + ?Sized>(
    rows: &[ResponseRow],
    annotator: &A,
    config: &AnalysisConfig,
) -> SurveyAggregate {
    let analyses: Vec<RowAnalysis> = rows
        .par_iter()
        .map(|row| RowAnalysis::analyze(row, annotator))
        .collect();
    debug!(rows = analyses.len(), "Annotated rows in parallel");

    analyses
        .into_iter()
        .fold(SurveyAggregate::new(config), SurveyAggregate::absorb)
}

/// Dispatch on [`AnalysisConfig::parallel`].
pub fn aggregate<A: Annotator + ?Sized>(
    rows: &[ResponseRow],
    annotator: &A,
    config: &AnalysisConfig,
) -> SurveyAggregate {
    if config.parallel {
        aggregate_rows_parallel(rows, annotator, config)
    } else {
        aggregate_rows(rows, annotator, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::annotator::testing::scene_annotator;
    use crate::types::{Stimulus, StimulusResponse};

    fn sample_rows() -> Vec<ResponseRow> {
        vec![
            ResponseRow::from_responses(vec![
                StimulusResponse::new(Some("A bright red house"), Some("bright, red")),
                StimulusResponse::new(Some("An eerie dog"), Some("eerie")),
                StimulusResponse::new(None, Some("house")),
                StimulusResponse::new(Some("Calm lake"), None),
                StimulusResponse::default(),
                StimulusResponse::new(Some("Trees"), Some("  ")),
            ]),
            ResponseRow::from_responses(vec![
                StimulusResponse::new(Some("Red trees and a house"), Some("red; vivid")),
                StimulusResponse::new(Some("Dog in Paris"), Some("dark")),
                StimulusResponse::new(Some("calm"), Some("very, 42")),
                StimulusResponse::default(),
                StimulusResponse::default(),
                StimulusResponse::default(),
            ]),
        ]
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let annotator = scene_annotator();
        let rows = sample_rows();
        let cfg = AnalysisConfig::default();

        let sequential = aggregate_rows(&rows, &annotator, &cfg);
        let parallel = aggregate_rows_parallel(&rows, &annotator, &cfg);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.rows(), 2);
    }

    #[test]
    fn test_cell_statistics() {
        let annotator = scene_annotator();
        let aggregate = aggregate_rows(&sample_rows(), &annotator, &AnalysisConfig::default());

        let s1 = aggregate.stimulus(Stimulus::new(1).unwrap());
        assert_eq!(s1.stats, AdjectiveCellStats { cells: 2, valid_cells: 2 });

        // "house" and "very, 42" are processed but yield nothing
        let s3 = aggregate.stimulus(Stimulus::new(3).unwrap());
        assert_eq!(s3.stats, AdjectiveCellStats { cells: 2, valid_cells: 0 });

        // blank adjective cell is not processed
        let s6 = aggregate.stimulus(Stimulus::new(6).unwrap());
        assert_eq!(s6.stats, AdjectiveCellStats::default());

        // stimulus 2's two valid cells are left out
        assert_eq!(aggregate.overall().stats, AdjectiveCellStats { cells: 4, valid_cells: 2 });
    }

    #[test]
    fn test_overall_excludes_configured_stimulus() {
        let annotator = scene_annotator();
        let aggregate = aggregate_rows(&sample_rows(), &annotator, &AnalysisConfig::default());

        let s2 = aggregate.stimulus(Stimulus::new(2).unwrap());
        assert!(s2.tokens.contains("dog"));
        assert!(s2.nouns.contains("paris"));
        assert!(s2.adjectives.contains("eerie"));

        let overall = aggregate.overall();
        assert!(!overall.tokens.contains("dog"));
        assert!(!overall.tokens.contains("eerie"));
        assert!(!overall.nouns.contains("paris"));
        assert!(!overall.adjectives.contains("dark"));
        assert_eq!(overall.tokens.count("red"), 2);
        assert_eq!(overall.tokens.count("calm"), 2);
    }

    #[test]
    fn test_other_exclusion() {
        let annotator = scene_annotator();
        let cfg = AnalysisConfig::new().with_excluded_stimulus(1);
        let aggregate = aggregate(&sample_rows(), &annotator, &cfg);

        assert!(aggregate.overall().tokens.contains("dog"));
        assert_eq!(aggregate.overall().tokens.count("red"), 0);
        assert_eq!(aggregate.overall().stats, AdjectiveCellStats { cells: 4, valid_cells: 2 });
    }
}
