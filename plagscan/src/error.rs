use crate::ui::Message;
use snafu::prelude::*;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::SendError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}: {source}", path.display()))]
    Io { path: PathBuf, source: io::Error },

    #[snafu(display("unable to parse config file: {source}"))]
    ConfigRead { source: toml::de::Error },

    #[snafu(display("corpus directory {} contains no files", path.display()))]
    EmptyCorpus { path: PathBuf },

    #[snafu(display("phrase window must be at least 1, got {window}"))]
    InvalidWindow { window: usize },

    #[snafu(display("reporter channel closed before the run finished"))]
    BrokenPipe { source: SendError<Message> },
}

pub type Result<T> = std::result::Result<T, Error>;
