//! Console summary of adjective cell statistics

use std::fmt;

use crate::aggregate::{AdjectiveCellStats, SurveyAggregate};
use crate::types::Stimulus;

/// Per-column and overall adjective cell counts, printable as a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjectiveStatsReport {
    pub columns: Vec<(Stimulus, AdjectiveCellStats)>,
    pub overall: AdjectiveCellStats,
}

impl AdjectiveStatsReport {
    pub fn from_aggregate(aggregate: &SurveyAggregate) -> Self {
        Self {
            columns: aggregate
                .stimuli()
                .map(|(stimulus, acc)| (stimulus, acc.stats))
                .collect(),
            overall: aggregate.overall().stats,
        }
    }
}

impl fmt::Display for AdjectiveStatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Adjective Column Statistics (cells processed and valid cells):")?;
        for (stimulus, stats) in &self.columns {
            writeln!(f, "{}:", stimulus.adjective_column())?;
            writeln!(f, "  Cells processed: {}", stats.cells)?;
            writeln!(f, "  Valid cells: {}", stats.valid_cells)?;
        }
        writeln!(f)?;
        writeln!(f, "Overall Adjective Statistics (from included images):")?;
        writeln!(f, "  Cells processed: {}", self.overall.cells)?;
        write!(f, "  Valid cells: {}", self.overall.valid_cells)
    }
}
