//! Optional TOML configuration for the CLI.
//!
//! ```toml
//! [render]
//! width = 80
//! min_dist = 5.0
//!
//! [output]
//! target = "stderr"
//! ```

use crate::{AnsiArtError, Options, Result, DEFAULT_MIN_DIST};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub min_dist: Option<f64>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub target: Option<OutputTarget>,
}

/// Stream the rendered image is printed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl Config {
    /// Read and parse a config file. Unlike a missing `--config` flag, a
    /// missing file at an explicit path is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|source| AnsiArtError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge command-line values over this file's values, falling back to
    /// built-in defaults for anything neither sets.
    pub fn resolve(
        &self,
        width: Option<u32>,
        min_dist: Option<f64>,
        target: Option<OutputTarget>,
    ) -> (Options, OutputTarget) {
        let options = Options {
            max_char_width: width.or(self.render.width),
            min_dist: min_dist.or(self.render.min_dist).unwrap_or(DEFAULT_MIN_DIST),
        };
        (options, target.or(self.output.target).unwrap_or_default())
    }
}
