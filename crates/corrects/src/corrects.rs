//! Main Corrects struct and public API.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CorrectsError, Result};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::output::{DEFAULT_SUFFIX, scored_path, write_table};
use crate::scoring::{REQUIRED_COLUMNS, ScoreSummary, Scorer};

/// Configuration for a scoring run.
#[derive(Debug, Clone)]
pub struct CorrectsConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Suffix inserted before the extension for output names.
    pub suffix: String,
}

impl Default for CorrectsConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Result of scoring one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Where the scored rows were written.
    pub output: PathBuf,
    /// Scoring counts.
    pub summary: ScoreSummary,
}

/// The scoring pipeline: load, score, write.
pub struct Corrects {
    config: CorrectsConfig,
    parser: Parser,
    scorer: Scorer,
}

impl Corrects {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(CorrectsConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: CorrectsConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());

        Self {
            config,
            parser,
            scorer: Scorer::new(),
        }
    }

    /// Use a different output suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    /// Score one input file and write the result next to it.
    ///
    /// The input must exist and the derived output must not; both are checked
    /// before anything is read, so a refused run leaves no trace.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<ProcessReport> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CorrectsError::InputNotFound(path.to_path_buf()));
        }

        let output = scored_path(path, &self.config.suffix);
        if output.exists() {
            return Err(CorrectsError::OutputExists(output));
        }

        let (mut table, source) = self.parser.parse_file(path)?;
        table.require_columns(REQUIRED_COLUMNS)?;

        let summary = self.scorer.score(&mut table)?;

        write_table(&table, &output)?;

        Ok(ProcessReport {
            source,
            output,
            summary,
        })
    }

    /// Score a list of input files in order, stopping at the first failure.
    pub fn process_all(&self, paths: &[PathBuf]) -> Result<Vec<ProcessReport>> {
        let mut reports = Vec::with_capacity(paths.len());
        for path in paths {
            reports.push(self.process(path)?);
        }
        Ok(reports)
    }
}

impl Default for Corrects {
    fn default() -> Self {
        Self::new()
    }
}
