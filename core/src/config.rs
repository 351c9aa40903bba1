use crate::idf::IdfWeighting;
use crate::normalizer::Lexicon;
use crate::pipeline::RankOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const FILE_MATCHES: usize = 1;
pub const SENTENCE_MATCHES: usize = 1;

/// Settings read from an optional JSON file; command-line flags win over file values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub file_matches: usize,
    pub sentence_matches: usize,
    pub smoothed_idf: bool,
    /// Replaces the built-in English list when set.
    pub stopwords: Option<Vec<String>>,
    pub extra_stopwords: Vec<String>,
    /// Only read corpus files with this extension (without the dot).
    pub extension: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
            smoothed_idf: false,
            stopwords: None,
            extra_stopwords: Vec::new(),
            extension: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let buf = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&buf).with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            bail!("file_matches must be at least 1");
        }
        if self.sentence_matches == 0 {
            bail!("sentence_matches must be at least 1");
        }
        Ok(())
    }

    pub fn lexicon(&self) -> Lexicon {
        let base = match &self.stopwords {
            Some(words) => Lexicon::with_stopwords(words),
            None => Lexicon::english(),
        };
        base.with_extra_stopwords(&self.extra_stopwords)
    }

    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            file_matches: self.file_matches,
            sentence_matches: self.sentence_matches,
            idf_weighting: if self.smoothed_idf { IdfWeighting::Smoothed } else { IdfWeighting::Standard },
        }
    }
}
