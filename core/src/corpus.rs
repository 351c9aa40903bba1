use crate::normalizer::{Normalizer, Term};
use std::collections::BTreeMap;

pub type DocId = String;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    /// Raw text, kept for sentence extraction.
    pub text: String,
    pub terms: Vec<Term>,
}

/// Named documents, normalized once and then read-only for the rest of the query session.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    docs: BTreeMap<DocId, Document>,
}

impl Corpus {
    /// Normalize every (name, text) pair. A repeated name keeps the last text.
    pub fn build<I>(normalizer: &Normalizer<'_>, texts: I) -> Self
    where
        I: IntoIterator<Item = (DocId, String)>,
    {
        let mut docs = BTreeMap::new();
        for (id, text) in texts {
            let terms = normalizer.normalize(&text);
            docs.insert(id.clone(), Document { id, text, terms });
        }
        let corpus = Self { docs };
        tracing::debug!(num_docs = corpus.len(), num_terms = corpus.total_terms(), "built corpus");
        corpus
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn get(&self, id: &str) -> Option<&Document> { self.docs.get(id) }

    pub fn documents(&self) -> impl Iterator<Item = &Document> + '_ { self.docs.values() }

    /// (id, terms) pairs in ascending id order, the shape the rankers and IDF consume.
    pub fn units(&self) -> impl Iterator<Item = (&DocId, &Vec<Term>)> + '_ {
        self.docs.iter().map(|(id, doc)| (id, &doc.terms))
    }

    pub fn total_terms(&self) -> usize { self.docs.values().map(|d| d.terms.len()).sum() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sorted_normalized_documents() {
        let normalizer = Normalizer::english();
        let corpus = Corpus::build(
            &normalizer,
            vec![("b.txt".to_string(), "The dog ran.".to_string()), ("a.txt".to_string(), "The cat sat.".to_string())],
        );
        assert_eq!(corpus.len(), 2);
        let ids: Vec<&DocId> = corpus.units().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt"]);
        let a = corpus.get("a.txt").unwrap();
        assert_eq!(a.terms, vec!["cat", "sat"]);
        assert_eq!(a.text, "The cat sat.");
        assert_eq!(corpus.total_terms(), 4);
    }
}
