use crate::config::{FILE_MATCHES, SENTENCE_MATCHES};
use crate::corpus::Corpus;
use crate::idf::{compute_idf_with, IdfWeighting};
use crate::normalizer::{Normalizer, Term};
use crate::rank::{score_documents, score_sentences, ScoredDocument, ScoredSentence};
use crate::sentences::SentenceSet;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    pub file_matches: usize,
    pub sentence_matches: usize,
    pub idf_weighting: IdfWeighting,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self { file_matches: FILE_MATCHES, sentence_matches: SENTENCE_MATCHES, idf_weighting: IdfWeighting::Standard }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Answer {
    pub query: String,
    /// Normalized query terms, sorted.
    pub terms: Vec<Term>,
    pub documents: Vec<ScoredDocument>,
    pub sentences: Vec<ScoredSentence>,
    pub took_s: f64,
}

impl Answer {
    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }

    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> + '_ { self.sentences.iter().map(|s| s.text.as_str()) }
}

/// Runs one query over one corpus snapshot: documents first, then sentences of the winners,
/// each stage with its own freshly computed IDF table.
#[derive(Debug, Clone, Copy)]
pub struct Answerer<'a> {
    normalizer: Normalizer<'a>,
    options: RankOptions,
}

impl<'a> Answerer<'a> {
    pub fn new(normalizer: Normalizer<'a>, options: RankOptions) -> Self { Self { normalizer, options } }

    pub fn answer(&self, corpus: &Corpus, query_text: &str) -> Answer {
        let start = Instant::now();
        let query = self.normalizer.query(query_text);
        let mut terms: Vec<Term> = query.iter().cloned().collect();
        terms.sort();
        // Edge case: empty after filtering
        if query.is_empty() || corpus.is_empty() {
            tracing::info!(query = query_text, "query has no searchable terms or corpus is empty");
            return Answer { query: query_text.to_string(), terms, took_s: start.elapsed().as_secs_f64(), ..Answer::default() };
        }

        let doc_idf = compute_idf_with(corpus.units().map(|(_, terms)| terms), self.options.idf_weighting);
        let mut documents = score_documents(&query, corpus.units(), &doc_idf);
        documents.truncate(self.options.file_matches);
        tracing::debug!(top = ?documents.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), "ranked documents");

        let winners = documents.iter().filter_map(|d| corpus.get(&d.id));
        let sentence_set = SentenceSet::from_documents(&self.normalizer, winners);
        let sentence_idf = compute_idf_with(sentence_set.units().map(|(_, terms)| terms), self.options.idf_weighting);
        let mut sentences = score_sentences(&query, sentence_set.units(), &sentence_idf);
        tracing::debug!(candidates = sentence_set.len(), matching = sentences.len(), "ranked sentences");
        sentences.truncate(self.options.sentence_matches);

        let took_s = start.elapsed().as_secs_f64();
        tracing::info!(num_terms = terms.len(), num_sentences = sentences.len(), took_s, "answered query");
        Answer { query: query_text.to_string(), terms, documents, sentences, took_s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::build(
            &Normalizer::english(),
            vec![
                ("cats.txt".to_string(), "Cats are small mammals. A cat sleeps most of the day.\nCats purr.".to_string()),
                ("dogs.txt".to_string(), "Dogs bark loudly. A dog is loyal.".to_string()),
            ],
        )
    }

    #[test]
    fn answers_from_the_best_document() {
        let corpus = corpus();
        let answerer = Answerer::new(Normalizer::english(), RankOptions::default());
        let answer = answerer.answer(&corpus, "Do cats purr?");
        assert_eq!(answer.terms, vec!["cats", "purr"]);
        assert_eq!(answer.documents.len(), 1);
        assert_eq!(answer.documents[0].id, "cats.txt");
        assert_eq!(answer.sentence_texts().collect::<Vec<_>>(), vec!["Cats purr."]);
    }

    #[test]
    fn stopword_query_is_empty() {
        let corpus = corpus();
        let answerer = Answerer::new(Normalizer::english(), RankOptions::default());
        let answer = answerer.answer(&corpus, "what is the");
        assert!(answer.is_empty());
        assert!(answer.documents.is_empty());
    }
}
