pub mod config;
pub mod corpus;
pub mod idf;
pub mod normalizer;
pub mod pipeline;
pub mod rank;
pub mod sentences;

pub use corpus::{Corpus, DocId, Document};
pub use idf::{compute_idf, compute_idf_with, IdfTable, IdfWeighting};
pub use normalizer::{normalize, Lexicon, Normalizer, Query, Term};
pub use pipeline::{Answer, Answerer, RankOptions};
pub use rank::{score_documents, score_sentences, top_documents, top_sentences, ScoredDocument, ScoredSentence};
pub use sentences::{split_sentences, SentenceSet};
