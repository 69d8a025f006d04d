//! Accuracy scoring for trial rows.

mod scorer;

pub use scorer::{ScoreSummary, Scorer};

/// Column carrying the language cue of a trial (`NL` or `EN`).
pub const CUE: &str = "cue";
/// Column carrying the transcribed response.
pub const RESPONSE: &str = "response";
/// Column carrying the Dutch name of the pictured object.
pub const NL_NAME: &str = "nl_name";
/// Column carrying the English name of the pictured object.
pub const EN_NAME: &str = "en_name";
/// Column filled in by scoring.
pub const ACCURACY: &str = "accuracy";

/// Columns every trial export must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[CUE, RESPONSE, NL_NAME, EN_NAME, ACCURACY];
