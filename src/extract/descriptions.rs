//! Description tokenization and noun extraction

use crate::nlp::annotator::Annotator;
use crate::nlp::normalize::normalize_cell;
use crate::types::Token;

/// Terms extracted from one description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionTerms {
    /// Lemmas of alphabetic, non-stopword tokens
    pub tokens: Vec<String>,
    /// Subset of `tokens` tagged NOUN or PROPN
    pub nouns: Vec<String>,
}

/// Extracts content words and nouns from free-text descriptions
#[derive(Debug, Clone, Copy)]
pub struct DescriptionExtractor<'a, A: ?Sized> {
    annotator: &'a A,
}

impl<'a, A: Annotator + ?Sized> DescriptionExtractor<'a, A> {
    pub fn new(annotator: &'a A) -> Self {
        Self { annotator }
    }

    /// Content-word lemmas, in order, duplicates kept.
    pub fn tokens(&self, raw: Option<&str>) -> Vec<String> {
        self.content_tokens(raw)
            .into_iter()
            .map(|t| t.lemma)
            .collect()
    }

    /// Noun and proper-noun lemmas, in order, duplicates kept.
    pub fn nouns(&self, raw: Option<&str>) -> Vec<String> {
        self.content_tokens(raw)
            .into_iter()
            .filter(|t| t.pos.is_noun())
            .map(|t| t.lemma)
            .collect()
    }

    /// Tokens and nouns from a single annotation pass.
    pub fn extract(&self, raw: Option<&str>) -> DescriptionTerms {
        let content = self.content_tokens(raw);
        let nouns = content
            .iter()
            .filter(|t| t.pos.is_noun())
            .map(|t| t.lemma.clone())
            .collect();
        let tokens = content.into_iter().map(|t| t.lemma).collect();
        DescriptionTerms { tokens, nouns }
    }

    fn content_tokens(&self, raw: Option<&str>) -> Vec<Token> {
        match normalize_cell(raw) {
            Some(text) => self
                .annotator
                .annotate(&text)
                .into_iter()
                .filter(Token::is_content_word)
                .collect(),
            None => Vec::new(),
        }
    }
}
