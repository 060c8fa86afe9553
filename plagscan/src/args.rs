use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Reporter {
    Ansi,
    Json,
}

/// Rank the document pairs of a corpus by how many phrases they share
#[derive(Clone, Debug, Parser)]
pub struct Args {
    /// The directory containing the corpus of documents to compare
    pub corpus: PathBuf,

    /// The path (relative to the current working directory) where a
    /// plagscan.toml config file is located
    #[clap(long, default_value = "plagscan.toml")]
    pub config_path: String,

    /// Number of consecutive words that make up one phrase. Overrides the
    /// config file.
    #[clap(short, long)]
    pub window: Option<usize>,

    /// Report a pair only when its shared-phrase count is strictly greater
    /// than this. Overrides the config file.
    #[clap(short, long)]
    pub threshold: Option<usize>,

    /// Report results as a live terminal UI or as a JSON document
    #[clap(long, value_enum, default_value = "ansi")]
    pub reporter: Reporter,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        PathBuf::from(self.config_path.as_str())
    }
}
