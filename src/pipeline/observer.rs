//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every method has a no-op default, so an observer only
//! implements what it needs.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::aggregate::SurveyAggregate;
use crate::types::ResponseRow;

pub const STAGE_LOAD: &str = "load";
pub const STAGE_ANALYZE: &str = "analyze";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_WRITE: &str = "write";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Timing and size of a finished stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items the stage produced (rows, table rows, ...).
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Receives callbacks from [`SurveyPipeline`](super::runner::SurveyPipeline).
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called once the whole export is in memory.
    fn on_rows(&mut self, _rows: &[ResponseRow]) {}

    /// Called after every row has been folded in.
    fn on_aggregate(&mut self, _aggregate: &SurveyAggregate) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects a report per finished stage, in order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

/// Logs stage completions through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        debug!(
            stage,
            elapsed_ms = report.elapsed().as_millis() as u64,
            items = report.items(),
            "Stage finished"
        );
    }

    fn on_aggregate(&mut self, aggregate: &SurveyAggregate) {
        let overall = aggregate.overall();
        debug!(
            rows = aggregate.rows(),
            words = overall.tokens.len(),
            word_occurrences = overall.tokens.total(),
            adjectives = overall.adjectives.len(),
            nouns = overall.nouns.len(),
            "Aggregated responses"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_report_items() {
        let report = StageReport::new(Duration::from_millis(5)).with_items(3);
        assert_eq!(report.items(), Some(3));
        assert_eq!(report.elapsed(), Duration::from_millis(5));
        assert_eq!(StageReport::new(Duration::ZERO).items(), None);
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_LOAD, &StageReport::new(Duration::from_millis(2)));
        obs.on_stage_end(STAGE_ANALYZE, &StageReport::new(Duration::from_millis(3)));

        let stages: Vec<&str> = obs.reports().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec![STAGE_LOAD, STAGE_ANALYZE]);
        assert_eq!(obs.total(), Duration::from_millis(5));
    }
}
