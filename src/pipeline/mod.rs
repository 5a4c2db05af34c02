//! Batch pipeline
//!
//! [`runner::SurveyPipeline`] loads the export, analyzes and folds every
//! row, ranks the counts and writes the table, notifying a
//! [`observer::PipelineObserver`] at each stage boundary.

pub mod artifacts;
pub mod observer;
pub mod runner;
