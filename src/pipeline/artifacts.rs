//! Pipeline output artifacts.

use crate::aggregate::SurveyAggregate;
use crate::report::console::AdjectiveStatsReport;
use crate::report::export::ExportTable;

/// Everything a pipeline run produces
#[derive(Debug, Clone)]
pub struct SurveyReport {
    /// Raw per-stimulus and overall counts
    pub aggregate: SurveyAggregate,
    /// Ranked, padded table for CSV export
    pub table: ExportTable,
    /// Console block of adjective cell statistics
    pub adjective_stats: AdjectiveStatsReport,
}

impl SurveyReport {
    pub fn from_aggregate(aggregate: SurveyAggregate) -> Self {
        let table = ExportTable::from_aggregate(&aggregate);
        let adjective_stats = AdjectiveStatsReport::from_aggregate(&aggregate);
        Self {
            aggregate,
            table,
            adjective_stats,
        }
    }
}
