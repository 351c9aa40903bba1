mod loader;

use anyhow::{Context, Result};
use clap::Parser;
use questions_core::config::Config;
use questions_core::{Answerer, Corpus, Normalizer};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Answer a question with the most relevant sentence from a text corpus", long_about = None)]
struct Cli {
    /// Directory of plain-text documents
    corpus: PathBuf,
    /// Number of top documents to draw sentences from
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    files: Option<u64>,
    /// Number of sentences to print
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    sentences: Option<u64>,
    /// Use smoothed IDF = ln(1 + N/df) instead of ln(N/df)
    #[arg(long, default_value_t = false)]
    smoothed_idf: bool,
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Only read corpus files with this extension
    #[arg(long)]
    extension: Option<String>,
    /// Print the full ranking as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(n) = self.files { config.file_matches = n as usize; }
        if let Some(n) = self.sentences { config.sentence_matches = n as usize; }
        if self.smoothed_idf { config.smoothed_idf = true; }
        if self.extension.is_some() { config.extension = self.extension.clone(); }
        Ok(config)
    }
}

fn main() -> Result<()> {
    fmt().with_writer(io::stderr).with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let texts = loader::load_files(&cli.corpus, config.extension.as_deref())?;
    let lexicon = config.lexicon();
    let normalizer = Normalizer::new(&lexicon);
    let corpus = Corpus::build(&normalizer, texts);

    let query = read_query()?;
    let answer = Answerer::new(normalizer, config.rank_options()).answer(&corpus, &query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&answer)?)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{sentence}")?;
        }
    }
    Ok(())
}

fn read_query() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Query: ");
        io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("reading query from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
