//! Survey word-frequency batch run
//!
//! Reads `survey_results.csv` from the working directory, prints the
//! adjective cell statistics and writes `survey_analysis_results.csv`.
//!
//! The input is the CSV export of the survey sheet. Save the spreadsheet as
//! CSV (17 columns, header row kept) before running; `.xlsx` files are
//! rejected with a schema error.

use anyhow::{Context, Result};
use survey_wordfreq::prelude::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting survey-wordfreq v{}", env!("CARGO_PKG_VERSION"));

    let annotator = NlpruleAnnotator::from_path(TOKENIZER_PATH)
        .with_context(|| format!("Failed to load annotator model: {}", TOKENIZER_PATH))?;
    let pipeline = SurveyPipeline::new(annotator, AnalysisConfig::default())?;

    let report = pipeline
        .run_files(INPUT_PATH, OUTPUT_PATH, &mut TracingObserver)
        .with_context(|| format!(
                "Failed to analyze survey export: {} (expected the sheet saved as CSV)",
                INPUT_PATH
            ))?;

    println!("{}", report.adjective_stats);
    println!();
    println!("Results saved to '{}'", OUTPUT_PATH);

    Ok(())
}
