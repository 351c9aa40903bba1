use crate::corpus::DocId;
use crate::idf::IdfTable;
use crate::normalizer::{Query, Term};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    /// Sum of idf over every query-term occurrence in the sentence.
    pub idf_sum: f64,
    /// Fraction of the sentence's terms that are query terms.
    pub density: f64,
}

/// A lookup miss is a zero contribution: query terms outside the snapshot simply don't score.
#[inline]
fn idf_of(idf: &IdfTable, term: &str) -> f64 {
    idf.get(term).copied().unwrap_or(0.0)
}

/// Run `score` over every unit, on the rayon pool when built with `parallel`.
/// Callers sort the collected output, so evaluation order never leaks into results.
fn score_units<'a, K, U, T, F>(units: Vec<(&'a K, &'a U)>, score: F) -> Vec<T>
where
    K: ?Sized + Sync + 'a,
    U: AsRef<[Term]> + ?Sized + Sync + 'a,
    T: Send,
    F: Fn(&'a K, &'a [Term]) -> Option<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        units.into_par_iter().filter_map(|(key, terms)| score(key, terms.as_ref())).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        units.into_iter().filter_map(|(key, terms)| score(key, terms.as_ref())).collect()
    }
}

/// TF-IDF score of every document, best first; equal scores fall back to ascending id.
pub fn score_documents<'a, I, K, U>(query: &Query, docs: I, idf: &IdfTable) -> Vec<ScoredDocument>
where
    I: IntoIterator<Item = (&'a K, &'a U)>,
    K: AsRef<str> + ?Sized + Sync + 'a,
    U: AsRef<[Term]> + ?Sized + Sync + 'a,
{
    let units: Vec<(&K, &U)> = docs.into_iter().collect();
    let mut scored = score_units(units, |id, terms| {
        let mut tf: HashMap<&str, u32> = HashMap::new();
        for term in terms {
            if query.contains(term) {
                *tf.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        let score: f64 = query
            .iter()
            .map(|q| tf.get(q.as_str()).copied().unwrap_or(0) as f64 * idf_of(idf, q))
            .sum();
        Some(ScoredDocument { id: id.as_ref().to_string(), score })
    });
    scored.sort_by(compare_documents);
    scored
}

/// Identifiers of the `n` best documents for `query` (all of them if there are fewer).
pub fn top_documents<'a, I, K, U>(query: &Query, docs: I, idf: &IdfTable, n: usize) -> Vec<DocId>
where
    I: IntoIterator<Item = (&'a K, &'a U)>,
    K: AsRef<str> + ?Sized + Sync + 'a,
    U: AsRef<[Term]> + ?Sized + Sync + 'a,
{
    score_documents(query, docs, idf).into_iter().take(n).map(|d| d.id).collect()
}

/// Score every sentence sharing at least one term with `query`.
/// Order: idf sum desc, then query-term density desc, then text asc.
pub fn score_sentences<'a, I, K, U>(query: &Query, sentences: I, idf: &IdfTable) -> Vec<ScoredSentence>
where
    I: IntoIterator<Item = (&'a K, &'a U)>,
    K: AsRef<str> + ?Sized + Sync + 'a,
    U: AsRef<[Term]> + ?Sized + Sync + 'a,
{
    let units: Vec<(&K, &U)> = sentences.into_iter().collect();
    let mut scored = score_units(units, |text, terms| {
        let mut idf_sum = 0.0;
        let mut matches = 0usize;
        // Per occurrence: a query term repeated k times contributes k times.
        for term in terms.iter().filter(|t| query.contains(*t)) {
            idf_sum += idf_of(idf, term);
            matches += 1;
        }
        if idf_sum == 0.0 {
            return None;
        }
        let density = matches as f64 / terms.len() as f64;
        Some(ScoredSentence { text: text.as_ref().to_string(), idf_sum, density })
    });
    scored.sort_by(compare_sentences);
    scored
}

pub fn top_sentences<'a, I, K, U>(query: &Query, sentences: I, idf: &IdfTable, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = (&'a K, &'a U)>,
    K: AsRef<str> + ?Sized + Sync + 'a,
    U: AsRef<[Term]> + ?Sized + Sync + 'a,
{
    score_sentences(query, sentences, idf).into_iter().take(n).map(|s| s.text).collect()
}

fn compare_documents(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

fn compare_sentences(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.idf_sum
        .total_cmp(&a.idf_sum)
        .then_with(|| b.density.total_cmp(&a.density))
        .then_with(|| a.text.cmp(&b.text))
}
