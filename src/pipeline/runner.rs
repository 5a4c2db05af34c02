//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`SurveyPipeline`] owns an [`Annotator`] and an [`AnalysisConfig`].
//! Stages run in order:
//! 1. Load the export (fatal on I/O or schema errors)
//! 2. Analyze and fold every row
//! 3. Rank the counts into the export table
//! 4. Write the CSV
//!
//! Each stage runs inside a `tracing` span and is reported to the observer.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::aggregate::{aggregate, SurveyAggregate};
use crate::errors::Result;
use crate::input::SurveyLoader;
use crate::nlp::annotator::Annotator;
use crate::pipeline::artifacts::SurveyReport;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_ANALYZE, STAGE_LOAD, STAGE_RANK, STAGE_WRITE,
};
use crate::types::{AnalysisConfig, ResponseRow};

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Survey analysis pipeline over a chosen annotator
#[derive(Debug, Clone)]
pub struct SurveyPipeline<A> {
    annotator: A,
    config: AnalysisConfig,
}

impl<A: Annotator> SurveyPipeline<A> {
    /// Build a pipeline, rejecting an invalid configuration up front.
    pub fn new(annotator: A, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { annotator, config })
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze rows that are already in memory.
    pub fn analyze(
        &self,
        rows: &[ResponseRow],
        observer: &mut impl PipelineObserver,
    ) -> SurveyAggregate {
        trace_stage!(STAGE_ANALYZE);
        observer.on_stage_start(STAGE_ANALYZE);
        let clock = StageClock::start();
        let aggregate = aggregate(rows, &self.annotator, &self.config);
        let report = StageReport::new(clock.elapsed()).with_items(aggregate.rows());
        observer.on_stage_end(STAGE_ANALYZE, &report);
        observer.on_aggregate(&aggregate);
        aggregate
    }

    /// Rank an aggregate into the exportable report.
    pub fn report(
        &self,
        aggregate: SurveyAggregate,
        observer: &mut impl PipelineObserver,
    ) -> SurveyReport {
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let report = SurveyReport::from_aggregate(aggregate);
        let stage = StageReport::new(clock.elapsed()).with_items(report.table.max_rows());
        observer.on_stage_end(STAGE_RANK, &stage);
        report
    }

    /// Load, analyze and rank an export read from `reader`.
    pub fn run<R: Read>(
        &self,
        reader: R,
        observer: &mut impl PipelineObserver,
    ) -> Result<SurveyReport> {
        let rows = {
            trace_stage!(STAGE_LOAD);
            observer.on_stage_start(STAGE_LOAD);
            let clock = StageClock::start();
            let rows = SurveyLoader::new().load(reader)?;
            let report = StageReport::new(clock.elapsed()).with_items(rows.len());
            observer.on_stage_end(STAGE_LOAD, &report);
            rows
        };
        observer.on_rows(&rows);
        debug!(rows = rows.len(), "Survey export loaded");

        let aggregate = self.analyze(&rows, observer);
        Ok(self.report(aggregate, observer))
    }

    /// Run over the export at `input` and write the table to `output`.
    ///
    /// Nothing is written if loading fails.
    pub fn run_files(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        observer: &mut impl PipelineObserver,
    ) -> Result<SurveyReport> {
        let file = std::fs::File::open(input.as_ref())?;
        let report = self.run(file, observer)?;

        trace_stage!(STAGE_WRITE);
        observer.on_stage_start(STAGE_WRITE);
        let clock = StageClock::start();
        report.table.write_to_path(output)?;
        let stage = StageReport::new(clock.elapsed()).with_items(report.table.max_rows());
        observer.on_stage_end(STAGE_WRITE, &stage);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SurveyError;
    use crate::nlp::annotator::testing::scene_annotator;
    use crate::nlp::annotator::LexiconAnnotator;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};
    use crate::types::Stimulus;

    const HEADER: &str = "Timestamp,PROLIFIC_ID,Description_1,Adjectives_1,Description_2,Adjectives_2,\
Description_3,Adjectives_3,Description_4,Adjectives_4,Description_5,Adjectives_5,\
Description_6,Adjectives_6,Familiarity_AI_Gen,AI_Art_Real,Education";

    fn sample_export() -> String {
        format!(
            "{HEADER}\n\
             t1,p1,a bright red house,\"bright, red\",eerie dog,eerie,,,,,,,,,1,2,BA\n\
             t2,p2,calm lake,calm,dog,,,,,,,,trees,very,3,4,MA\n"
        )
    }

    fn pipeline() -> SurveyPipeline<LexiconAnnotator> {
        SurveyPipeline::new(scene_annotator(), AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = SurveyPipeline::new(
            scene_annotator(),
            AnalysisConfig::new().with_excluded_stimulus(0),
        );
        assert!(matches!(result, Err(SurveyError::InvalidConfig(_))));
    }

    #[test]
    fn test_run_with_noop_observer() {
        let report = pipeline()
            .run(sample_export().as_bytes(), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.aggregate.rows(), 2);
        let s1 = report.aggregate.stimulus(Stimulus::new(1).unwrap());
        assert_eq!(s1.stats.cells, 2);
        assert_eq!(s1.stats.valid_cells, 2);

        // dog only appears in the excluded stimulus
        assert!(!report.aggregate.overall().tokens.contains("dog"));
        assert_eq!(report.adjective_stats.overall.cells, 3);
        assert_eq!(report.adjective_stats.overall.valid_cells, 2);
    }

    #[test]
    fn test_run_with_timing_observer() {
        let mut obs = StageTimingObserver::new();
        let report = pipeline().run(sample_export().as_bytes(), &mut obs).unwrap();

        let stages: Vec<&str> = obs.reports().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec![STAGE_LOAD, STAGE_ANALYZE, STAGE_RANK]);
        assert_eq!(obs.reports()[0].1.items(), Some(2));
        assert_eq!(obs.reports()[2].1.items(), Some(report.table.max_rows()));
    }

    #[test]
    fn test_parallel_pipeline_matches_sequential() {
        let parallel = SurveyPipeline::new(
            scene_annotator(),
            AnalysisConfig::new().with_parallel(true),
        )
        .unwrap();

        let a = pipeline().run(sample_export().as_bytes(), &mut NoopObserver).unwrap();
        let b = parallel.run(sample_export().as_bytes(), &mut NoopObserver).unwrap();
        assert_eq!(a.table, b.table);
        assert_eq!(a.adjective_stats, b.adjective_stats);
    }

    #[test]
    fn test_run_files_writes_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("survey_results.csv");
        let output = dir.path().join("survey_analysis_results.csv");
        std::fs::write(&input, sample_export()).unwrap();

        let mut obs = StageTimingObserver::new();
        let report = pipeline().run_files(&input, &output, &mut obs).unwrap();
        assert_eq!(obs.reports().last().unwrap().0, STAGE_WRITE);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 1 + report.table.max_rows());
        assert!(written.starts_with("Image_1_Free_Word,"));
    }

    #[test]
    fn test_schema_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("survey_results.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "a,b\n1,2\n").unwrap();

        let err = pipeline()
            .run_files(&input, &output, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, SurveyError::SchemaMismatch { .. }));
        assert!(!output.exists());
    }
}
