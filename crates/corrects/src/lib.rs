//! Corrects: accuracy scoring for bilingual picture-naming trial exports.
//!
//! Trial exports arrive as CSV with one row per naming attempt. Each row carries
//! the language cue (`NL` or `EN`), the transcribed response, and the Dutch and
//! English names of the pictured object. Corrects fills in the `accuracy` column:
//! `1` when the response matches the cue-selected name exactly or with the `H_`
//! hesitation prefix, `NA` for the `.` non-response marker, untouched otherwise.
//! The scored rows are written next to the input under a suffixed name; existing
//! files are never overwritten.
//!
//! # Example
//!
//! ```no_run
//! use corrects::Corrects;
//!
//! let corrects = Corrects::new();
//! let report = corrects.process("trials.csv").unwrap();
//!
//! println!("Scored {} rows", report.summary.rows);
//! println!("Saved to {}", report.output.display());
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod scoring;

mod corrects;

pub use crate::corrects::{Corrects, CorrectsConfig, ProcessReport};
pub use error::{CorrectsError, Result};
pub use input::{Parser, ParserConfig, SourceMetadata, TrialTable};
pub use output::{DEFAULT_SUFFIX, scored_path, write_table};
pub use scoring::{ScoreSummary, Scorer};
