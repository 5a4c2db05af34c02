//! Core types shared across the analysis pipeline
//!
//! Annotated tokens, the fixed questionnaire layout (stimuli and response
//! rows), and the analysis configuration.

use std::fmt;

use crate::errors::{Result, SurveyError};

/// Number of image/adjective pairs in the questionnaire.
pub const STIMULUS_COUNT: usize = 6;

/// Stimulus left out of the overall roll-up (still reported on its own).
pub const EXCLUDED_STIMULUS: u8 = 2;

/// Number of columns in a survey export row.
///
/// Timestamp, participant id, six description/adjective pairs, then the
/// familiarity, realism and education answers.
pub const RESPONSE_COLUMNS: usize = 2 + 2 * STIMULUS_COUNT + 3;

/// Survey export read by the binary.
pub const INPUT_PATH: &str = "survey_results.csv";

/// Frequency table written by the binary.
pub const OUTPUT_PATH: &str = "survey_analysis_results.csv";

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PosTag {
    /// Map a Penn Treebank tag (`JJ`, `NNS`, `VBD`, ...) to a coarse tag.
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NN" | "NNS" => PosTag::Noun,
            "NNP" | "NNPS" => PosTag::ProperNoun,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" => PosTag::Adverb,
            "PRP" | "PRP$" | "WP" | "WP$" => PosTag::Pronoun,
            "DT" | "PDT" | "WDT" => PosTag::Determiner,
            "IN" | "TO" => PosTag::Preposition,
            "CC" => PosTag::Conjunction,
            "CD" => PosTag::Numeral,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" => PosTag::Punctuation,
            t if t.starts_with("VB") || t == "MD" => PosTag::Verb,
            _ => PosTag::Other,
        }
    }

    /// Universal dependency label for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Other => "X",
        }
    }

    /// NOUN or PROPN
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    pub fn is_adjective(&self) -> bool {
        *self == PosTag::Adjective
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token produced by an [`Annotator`](crate::nlp::annotator::Annotator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text as it appeared in the input
    pub text: String,
    /// Lowercased dictionary form
    pub lemma: String,
    /// Coarse part-of-speech tag
    pub pos: PosTag,
    /// Whether every character of the surface text is alphabetic
    pub is_alpha: bool,
    /// Whether the token is a stopword
    pub is_stopword: bool,
}

impl Token {
    /// Create a token; `is_alpha` is derived from the surface text.
    pub fn new(text: &str, lemma: &str, pos: PosTag) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_lowercase(),
            pos,
            is_alpha: is_alphabetic(text),
            is_stopword: false,
        }
    }

    /// Mark the token as a stopword (or not).
    pub fn with_stopword(mut self, is_stopword: bool) -> Self {
        self.is_stopword = is_stopword;
        self
    }

    /// Alphabetic and not a stopword.
    pub fn is_content_word(&self) -> bool {
        self.is_alpha && !self.is_stopword
    }
}

/// Non-empty and made only of alphabetic characters.
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// One of the questionnaire's image slots, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stimulus(u8);

impl Stimulus {
    /// Create a stimulus from its 1-based number.
    pub fn new(number: u8) -> Result<Self> {
        if number == 0 || usize::from(number) > STIMULUS_COUNT {
            return Err(SurveyError::InvalidConfig(format!(
                "stimulus {number} is outside 1..={STIMULUS_COUNT}"
            )));
        }
        Ok(Self(number))
    }

    /// All stimuli in questionnaire order.
    pub fn all() -> impl Iterator<Item = Stimulus> {
        (1..=STIMULUS_COUNT as u8).map(Stimulus)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based position within a response row.
    pub fn index(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Column prefix used in the exported table (`Image_3`).
    pub fn label(&self) -> String {
        format!("Image_{}", self.0)
    }

    /// Name of the adjective column in the survey export (`Adjectives_3`).
    pub fn adjective_column(&self) -> String {
        format!("Adjectives_{}", self.0)
    }
}

impl fmt::Display for Stimulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a participant wrote for a single image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimulusResponse {
    pub description: Option<String>,
    pub adjectives: Option<String>,
}

impl StimulusResponse {
    pub fn new(description: Option<&str>, adjectives: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
            adjectives: adjectives.map(str::to_string),
        }
    }
}

/// One survey submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRow {
    pub timestamp: Option<String>,
    pub participant_id: Option<String>,
    /// One entry per stimulus, in questionnaire order
    pub responses: Vec<StimulusResponse>,
    pub familiarity: Option<String>,
    pub realism: Option<String>,
    pub education: Option<String>,
}

impl ResponseRow {
    /// A row carrying only stimulus responses; metadata is left empty.
    pub fn from_responses(responses: Vec<StimulusResponse>) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }

    /// Response for a stimulus; rows shorter than the questionnaire read as empty.
    pub fn response(&self, stimulus: Stimulus) -> Option<&StimulusResponse> {
        self.responses.get(stimulus.index())
    }
}

/// Category of a counted item; names the exported column group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Content words from descriptions
    Free,
    /// Validated adjectives
    Adjective,
    /// Nouns and proper nouns from descriptions
    Noun,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Free, ItemKind::Adjective, ItemKind::Noun];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Free => "Free",
            ItemKind::Adjective => "Adj",
            ItemKind::Noun => "Noun",
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Stimulus reported on its own but left out of the overall roll-up
    pub excluded_stimulus: u8,
    /// Annotate rows on the rayon pool before folding them in row order
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            excluded_stimulus: EXCLUDED_STIMULUS,
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stimulus left out of the overall roll-up
    pub fn with_excluded_stimulus(mut self, number: u8) -> Self {
        self.excluded_stimulus = number;
        self
    }

    /// Enable or disable row-parallel annotation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the configuration before any rows are processed.
    pub fn validate(&self) -> Result<()> {
        Stimulus::new(self.excluded_stimulus).map(|_| ())
    }

    /// Whether a stimulus contributes to the overall roll-up.
    pub fn includes_in_overall(&self, stimulus: Stimulus) -> bool {
        stimulus.number() != self.excluded_stimulus
    }
}
