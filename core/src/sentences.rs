use crate::corpus::Document;
use crate::normalizer::{Normalizer, Term};
use std::collections::BTreeMap;
use unicode_segmentation::UnicodeSegmentation;

/// Split raw text into sentences: lines are passages, each passage is cut at UAX#29 sentence
/// boundaries. Sentences are trimmed; blank ones are skipped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|passage| passage.split_sentence_bounds())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Candidate sentences keyed by their original text, each normalized on its own.
#[derive(Debug, Default, Clone)]
pub struct SentenceSet {
    sentences: BTreeMap<String, Vec<Term>>,
}

impl SentenceSet {
    /// Sentences of `docs` that keep at least one term after normalization.
    /// The same sentence text appearing twice is one candidate.
    pub fn from_documents<'d, I>(normalizer: &Normalizer<'_>, docs: I) -> Self
    where
        I: IntoIterator<Item = &'d Document>,
    {
        let mut sentences = BTreeMap::new();
        for doc in docs {
            for sentence in split_sentences(&doc.text) {
                let terms = normalizer.normalize(sentence);
                if !terms.is_empty() {
                    sentences.insert(sentence.to_string(), terms);
                }
            }
        }
        Self { sentences }
    }

    pub fn len(&self) -> usize { self.sentences.len() }

    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }

    pub fn get(&self, text: &str) -> Option<&Vec<Term>> { self.sentences.get(text) }

    pub fn units(&self) -> impl Iterator<Item = (&String, &Vec<Term>)> + '_ { self.sentences.iter() }
}
