//! # survey-wordfreq
//!
//! Word, adjective and noun frequencies for image-description surveys.
//!
//! Each participant describes six images in free text and lists adjectives
//! for each. The crate lemmatizes and filters those answers through a
//! pluggable [`Annotator`], counts content words, validated adjectives and
//! nouns per image and across all images except one excluded stimulus, and
//! exports the ranked tables side by side as a single CSV.
//!
//! ```rust,ignore
//! use survey_wordfreq::prelude::*;
//!
//! let annotator = NlpruleAnnotator::from_path(TOKENIZER_PATH)?;
//! let pipeline = SurveyPipeline::new(annotator, AnalysisConfig::default())?;
//! let report = pipeline.run_files(INPUT_PATH, OUTPUT_PATH, &mut TracingObserver)?;
//! println!("{}", report.adjective_stats);
//! ```

pub mod aggregate;
pub mod errors;
pub mod extract;
pub mod input;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod types;

pub use errors::{Result, SurveyError};
pub use nlp::annotator::{Annotator, LexiconAnnotator};
pub use types::{AnalysisConfig, PosTag, ResponseRow, Stimulus, StimulusResponse, Token};

pub mod prelude {
    pub use crate::aggregate::{AdjectiveCellStats, SurveyAggregate};
    pub use crate::errors::{Result, SurveyError};
    pub use crate::nlp::annotator::{Annotator, LexiconAnnotator};
    #[cfg(feature = "nlprule")]
    pub use crate::nlp::nlprule_tagger::{NlpruleAnnotator, TOKENIZER_PATH};
    pub use crate::nlp::stopwords::StopwordFilter;
    pub use crate::pipeline::artifacts::SurveyReport;
    pub use crate::pipeline::observer::{NoopObserver, PipelineObserver, TracingObserver};
    pub use crate::pipeline::runner::SurveyPipeline;
    pub use crate::types::{AnalysisConfig, PosTag, Stimulus, Token, INPUT_PATH, OUTPUT_PATH};
}
