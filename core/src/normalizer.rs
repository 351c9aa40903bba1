use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

pub type Term = String;
pub type Query = HashSet<Term>;

lazy_static! {
    // Word runs (with inner apostrophes) or runs of anything that is neither word nor space.
    static ref RE: Regex = Regex::new(r"(?u)\w+(?:['\x{2019}]\w+)*|[^\w\s]+").expect("valid regex");
    static ref ENGLISH: Lexicon = Lexicon::english();
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
    "he","him","his","himself","she","she's","her","hers","herself","it","it's","its","itself",
    "they","them","their","theirs","themselves","what","which","who","whom","this","that","that'll","these","those",
    "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
    "a","an","the","and","but","if","or","because","as","until","while","of","at","by","for","with","about","against",
    "between","into","through","during","before","after","above","below","to","from","up","down","in","out","on","off",
    "over","under","again","further","then","once","here","there","when","where","why","how","all","any","both","each",
    "few","more","most","other","some","such","no","nor","not","only","own","same","so","than","too","very",
    "s","t","can","will","just","don","don't","should","should've","now","d","ll","m","o","re","ve","y",
    "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't",
    "haven","haven't","isn","isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't",
    "shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't",
];

const EXTRA_PUNCTUATION: &[char] = &['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2013}', '\u{2014}', '\u{2026}', '\u{00AB}', '\u{00BB}'];

/// Lowercase, with typographic apostrophes folded to ASCII so "don’t" and "don't" are one term.
fn fold(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// Stopword and punctuation resources shared by every normalization pass.
///
/// Built once and then only read; hand it to [`Normalizer::new`] by reference.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    punctuation: HashSet<char>,
}

impl Lexicon {
    /// English stopwords, ASCII punctuation plus typographic quotes and dashes.
    pub fn english() -> Self {
        Self::with_stopwords(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Default punctuation with a caller-supplied stopword list.
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let punctuation = (0u8..128)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .chain(EXTRA_PUNCTUATION.iter().copied())
            .collect();
        Self { stopwords: words.into_iter().map(|w| fold(w.as_ref())).collect(), punctuation }
    }

    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.extend(words.into_iter().map(|w| fold(w.as_ref())));
        self
    }

    /// Expects an already lowercased word.
    pub fn is_stopword(&self, word: &str) -> bool { self.stopwords.contains(word) }

    pub fn is_punctuation_word(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.punctuation.contains(&c))
    }

    pub fn stopword_count(&self) -> usize { self.stopwords.len() }
}

/// Turns raw text into ordered terms: segment, drop punctuation and stopwords, lowercase.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self { Self { lexicon } }

    pub fn normalize(&self, text: &str) -> Vec<Term> {
        let mut terms = Vec::new();
        for mat in RE.find_iter(text) {
            let word = mat.as_str();
            if self.lexicon.is_punctuation_word(word) { continue; }
            let lower = fold(word);
            if self.lexicon.is_stopword(&lower) { continue; }
            terms.push(lower);
        }
        terms
    }

    /// Normalize user input into a deduplicated query.
    pub fn query(&self, text: &str) -> Query {
        self.normalize(text).into_iter().collect()
    }
}

impl Normalizer<'static> {
    pub fn english() -> Self { Self { lexicon: &*ENGLISH } }
}

/// Normalize with the built-in English lexicon.
pub fn normalize(text: &str) -> Vec<Term> {
    Normalizer::english().normalize(text)
}
