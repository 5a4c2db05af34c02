//! English annotation backed by nlprule
//!
//! Wraps an `nlprule::Tokenizer`, which tokenizes, tags (Penn Treebank) and
//! lemmatizes using the binary model shipped by the nlprule project
//! (`en_tokenizer.bin`).

use std::path::Path;

use nlprule::Tokenizer;
use tracing::info;

use super::annotator::Annotator;
use super::stopwords::StopwordFilter;
use crate::errors::{Result, SurveyError};
use crate::types::{PosTag, Token};

/// Default location of the English tokenizer model.
pub const TOKENIZER_PATH: &str = "en_tokenizer.bin";

/// [`Annotator`] over an nlprule English tokenizer
pub struct NlpruleAnnotator {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl NlpruleAnnotator {
    /// Load the tokenizer model from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::new(path).map_err(|e| {
            SurveyError::annotator(format!(
                "could not load nlprule tokenizer from {}: {e}",
                path.display()
            ))
        })?;
        let stopwords = StopwordFilter::english();
        info!(
            path = %path.display(),
            stopwords = stopwords.len(),
            "Loaded nlprule tokenizer"
        );
        Ok(Self {
            tokenizer,
            stopwords,
        })
    }

    /// Replace the stopword list.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }
}

impl Annotator for NlpruleAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        let mut words: Vec<(String, Vec<(String, String)>)> = Vec::new();
        for sentence in self.tokenizer.pipe(text) {
            for token in sentence.tokens() {
                let word = token.word();
                let surface = word.text().as_str();
                if surface.trim().is_empty() {
                    continue;
                }
                let readings = word
                    .tags()
                    .iter()
                    .map(|tag| (tag.lemma().as_str().to_string(), tag.pos().as_str().to_string()))
                    .collect();
                words.push((surface.to_string(), readings));
            }
        }

        // Single-word input has no context to disambiguate with.
        let prefer = (words.len() == 1).then_some(PosTag::Adjective);

        words
            .iter()
            .map(|(surface, readings)| {
                let (lemma, pos) = resolve_tags(
                    surface,
                    readings.iter().map(|(l, t)| (l.as_str(), t.as_str())),
                    prefer,
                );
                Token::new(surface, &lemma, pos).with_stopword(self.stopwords.is_stopword(surface))
            })
            .collect()
    }
}

/// Pick lemma and coarse tag from nlprule's `(lemma, penn_tag)` readings.
///
/// A reading tagged `prefer` wins if there is one. Otherwise the first
/// reading with a recognized tag wins, and failing that the first reading at
/// all. An empty lemma falls back to the lowercased surface text.
fn resolve_tags<'a>(
    surface: &str,
    readings: impl Iterator<Item = (&'a str, &'a str)>,
    prefer: Option<PosTag>,
) -> (String, PosTag) {
    let readings: Vec<(&str, &str)> = readings.collect();
    let chosen = prefer
        .and_then(|wanted| {
            readings
                .iter()
                .find(|(_, tag)| PosTag::from_penn(tag) == wanted)
        })
        .or_else(|| {
            readings
                .iter()
                .find(|(_, tag)| PosTag::from_penn(tag) != PosTag::Other)
        })
        .or_else(|| readings.first());

    match chosen {
        Some((lemma, tag)) if !lemma.is_empty() => (lemma.to_lowercase(), PosTag::from_penn(tag)),
        Some((_, tag)) => (surface.to_lowercase(), PosTag::from_penn(tag)),
        None => (surface.to_lowercase(), PosTag::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_known_tag() {
        let readings = vec![("", "SENT_END"), ("house", "NNS")];
        let (lemma, pos) = resolve_tags("Houses", readings.into_iter(), None);
        assert_eq!(lemma, "house");
        assert_eq!(pos, PosTag::Noun);
    }

    #[test]
    fn test_resolve_empty_lemma_falls_back_to_surface() {
        let (lemma, pos) = resolve_tags("Vivid", vec![("", "JJ")].into_iter(), None);
        assert_eq!(lemma, "vivid");
        assert_eq!(pos, PosTag::Adjective);
    }

    #[test]
    fn test_resolve_without_readings() {
        let (lemma, pos) = resolve_tags("Xyz", std::iter::empty(), None);
        assert_eq!(lemma, "xyz");
        assert_eq!(pos, PosTag::Other);
    }

    #[test]
    fn test_resolve_lone_word_prefers_adjective_reading() {
        let readings = vec![("red", "NN"), ("red", "JJ")];
        let (lemma, pos) =
            resolve_tags("Red", readings.clone().into_iter(), Some(PosTag::Adjective));
        assert_eq!(lemma, "red");
        assert_eq!(pos, PosTag::Adjective);

        let (_, pos) = resolve_tags("Red", readings.into_iter(), None);
        assert_eq!(pos, PosTag::Noun);
    }

    #[test]
    fn test_resolve_preference_without_matching_reading() {
        let readings = vec![("lake", "NN")];
        let (lemma, pos) = resolve_tags("lake", readings.into_iter(), Some(PosTag::Adjective));
        assert_eq!(lemma, "lake");
        assert_eq!(pos, PosTag::Noun);
    }
}
