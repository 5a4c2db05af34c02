//! Linguistic annotation capability
//!
//! The analysis never tags or lemmatizes text itself. It consumes
//! [`Token`]s from an [`Annotator`], which makes the language model a
//! swappable dependency: [`LexiconAnnotator`] gives deterministic judgments
//! for tests, `NlpruleAnnotator` (feature `nlprule`) provides a general
//! English model.

use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordFilter;
use crate::types::{PosTag, Token};

/// Produces lemma, POS tag, alphabetic flag and stopword flag per token.
///
/// Implementations must be pure functions of the input text so rows can be
/// annotated on any thread.
pub trait Annotator: Send + Sync {
    /// Annotate `text`, returning tokens in input order.
    fn annotate(&self, text: &str) -> Vec<Token>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, text: &str) -> Vec<Token> {
        (**self).annotate(text)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, text: &str) -> Vec<Token> {
        (**self).annotate(text)
    }
}

/// Annotator driven by an explicit word list.
///
/// Text is segmented on Unicode word boundaries. Words found in the lexicon
/// take its lemma and tag; anything else keeps its lowercased surface form
/// as lemma and gets a tag guessed from its characters.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnnotator {
    entries: FxHashMap<String, (String, PosTag)>,
    stopwords: StopwordFilter,
}

impl LexiconAnnotator {
    /// Empty lexicon using the given stopword list.
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            entries: FxHashMap::default(),
            stopwords,
        }
    }

    /// Add one `word -> (lemma, tag)` entry.
    pub fn with_entry(mut self, word: &str, lemma: &str, pos: PosTag) -> Self {
        self.insert(word, lemma, pos);
        self
    }

    /// Add many entries at once.
    pub fn with_entries(mut self, entries: &[(&str, &str, PosTag)]) -> Self {
        for (word, lemma, pos) in entries {
            self.insert(word, lemma, *pos);
        }
        self
    }

    pub fn insert(&mut self, word: &str, lemma: &str, pos: PosTag) {
        self.entries
            .insert(word.to_lowercase(), (lemma.to_lowercase(), pos));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn token_for(&self, segment: &str) -> Token {
        let key = segment.to_lowercase();
        let token = match self.entries.get(&key) {
            Some((lemma, pos)) => Token::new(segment, lemma, *pos),
            None => Token::new(segment, &key, guess_tag(segment)),
        };
        token.with_stopword(self.stopwords.is_stopword(&key))
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| self.token_for(segment))
            .collect()
    }
}

fn guess_tag(segment: &str) -> PosTag {
    if segment.chars().all(|c| c.is_ascii_digit()) {
        PosTag::Numeral
    } else if !segment.chars().any(char::is_alphanumeric) {
        PosTag::Punctuation
    } else {
        PosTag::Other
    }
}


#[cfg(test)]
mod tests {
    use super::testing::scene_annotator;
    use super::*;

    #[test]
    fn test_lexicon_annotation() {
        let tokens = scene_annotator().annotate("The houses, in Paris");
        let lemmas: Vec<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["the", "house", ",", "in", "paris"]);

        assert!(tokens[0].is_stopword);
        assert_eq!(tokens[1].pos, PosTag::Noun);
        assert!(!tokens[2].is_alpha);
        assert_eq!(tokens[2].pos, PosTag::Punctuation);
        assert_eq!(tokens[4].pos, PosTag::ProperNoun);
    }

    #[test]
    fn test_unknown_words() {
        let tokens = scene_annotator().annotate("zebra 123");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lemma, "zebra");
        assert_eq!(tokens[0].pos, PosTag::Other);
        assert!(tokens[0].is_alpha);
        assert_eq!(tokens[1].pos, PosTag::Numeral);
        assert!(!tokens[1].is_alpha);
    }

    #[test]
    fn test_empty_text() {
        assert!(scene_annotator().annotate("").is_empty());
        assert!(scene_annotator().annotate("   ").is_empty());
    }

    #[test]
    fn test_annotator_as_trait_object() {
        let annotator: Box<dyn Annotator> = Box::new(scene_annotator());
        assert_eq!(annotator.annotate("calm lake").len(), 2);
    }
}
