use crate::normalizer::Term;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Term -> inverse document frequency over one snapshot of units.
pub type IdfTable = HashMap<Term, f64>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfWeighting {
    /// ln(N / df)
    #[default]
    Standard,
    /// ln(1 + N / df)
    Smoothed,
}

impl IdfWeighting {
    pub fn weight(self, num_units: usize, df: usize) -> f64 {
        // Unreachable when the vocabulary comes from the same units; a hit means they diverged.
        if df == 0 { return 0.0; }
        let ratio = num_units as f64 / df as f64;
        match self {
            IdfWeighting::Standard => ratio.ln(),
            IdfWeighting::Smoothed => (1.0 + ratio).ln(),
        }
    }
}

/// Compute ln(N / df) for every term that occurs in at least one unit.
pub fn compute_idf<'a, I, U>(units: I) -> IdfTable
where
    I: IntoIterator<Item = &'a U>,
    U: AsRef<[Term]> + ?Sized + 'a,
{
    compute_idf_with(units, IdfWeighting::Standard)
}

pub fn compute_idf_with<'a, I, U>(units: I, weighting: IdfWeighting) -> IdfTable
where
    I: IntoIterator<Item = &'a U>,
    U: AsRef<[Term]> + ?Sized + 'a,
{
    // Single pass: df counts each unit at most once per term.
    let mut num_units = 0usize;
    let mut df: HashMap<&'a str, usize> = HashMap::new();
    for unit in units {
        num_units += 1;
        let mut seen_in_unit: HashSet<&str> = HashSet::new();
        for term in unit.as_ref() {
            if seen_in_unit.insert(term.as_str()) {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }
    }

    let idf: IdfTable = df
        .into_iter()
        .map(|(term, df_t)| (term.to_string(), weighting.weight(num_units, df_t)))
        .collect();
    tracing::debug!(num_units, vocabulary = idf.len(), ?weighting, "computed idf");
    idf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<Term> { words.iter().map(|w| w.to_string()).collect() }

    #[test]
    fn rare_and_ubiquitous_terms() {
        let units = vec![terms(&["cat", "sat", "mat"]), terms(&["cat", "dog"]), terms(&["cat", "cat"])];
        let idf = compute_idf(&units);
        assert_eq!(idf["cat"], 0.0);
        assert!((idf["dog"] - 3f64.ln()).abs() < 1e-12);
        assert!((idf["sat"] - 3f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn duplicates_count_once_per_unit() {
        let units = vec![terms(&["rust", "rust", "rust"]), terms(&["go"])];
        let idf = compute_idf(&units);
        assert!((idf["rust"] - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn smoothed_weighting() {
        let units = vec![terms(&["a1"]), terms(&["a1", "b2"])];
        let idf = compute_idf_with(&units, IdfWeighting::Smoothed);
        assert!((idf["a1"] - 2f64.ln()).abs() < 1e-12);
        assert!((idf["b2"] - 3f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn zero_df_guard() {
        assert_eq!(IdfWeighting::Standard.weight(4, 0), 0.0);
        assert_eq!(IdfWeighting::Smoothed.weight(4, 0), 0.0);
    }

    #[test]
    fn empty_snapshot() {
        let units: Vec<Vec<Term>> = Vec::new();
        assert!(compute_idf(&units).is_empty());
    }
}
