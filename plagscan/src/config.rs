use crate::args::Args;
use crate::error::{ConfigReadSnafu, IoSnafu, Result};
use serde::Deserialize;
use snafu::prelude::*;
use std::io;
use std::path::Path;
use tokio::fs::read_to_string;
use toml::from_str;

pub const DEFAULT_WINDOW: usize = 4;
pub const DEFAULT_THRESHOLD: usize = 5;

/// Read a config file. A missing file is not an error: every setting has
/// a default and can also be given on the command line.
pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let s = match read_to_string(path.as_ref()).await {
        Ok(s) => s,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no config file at {}", path.as_ref().display());
            return Ok(Config::default());
        }
        Err(err) => {
            return Err(err).context(IoSnafu {
                path: path.as_ref(),
            })
        }
    };

    from_str(s.as_str()).context(ConfigReadSnafu)
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    scan: ScanConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ScanConfig {
    window: Option<usize>,
    threshold: Option<usize>,
}

impl Config {
    pub fn window(&self) -> Option<usize> {
        self.scan.window
    }

    pub fn threshold(&self) -> Option<usize> {
        self.scan.threshold
    }
}

/// The two knobs of a run after merging the command line, the config
/// file, and the defaults, in that order of precedence.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub window: usize,
    pub threshold: usize,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        Self {
            window: args.window.or(config.window()).unwrap_or(DEFAULT_WINDOW),
            threshold: args
                .threshold
                .or(config.threshold())
                .unwrap_or(DEFAULT_THRESHOLD),
        }
    }
}
