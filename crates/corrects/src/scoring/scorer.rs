//! Scorer that fills in the accuracy column.

use serde::{Deserialize, Serialize};

use super::{ACCURACY, CUE, EN_NAME, NL_NAME, RESPONSE};
use crate::error::{CorrectsError, Result};
use crate::input::TrialTable;

/// Cue value selecting the Dutch answer form.
const NL_CUE: &str = "NL";
/// Response marker for a trial without a usable response.
const NON_RESPONSE: &str = ".";
/// Accuracy value written for non-responses.
const NA: &str = "NA";
/// Accuracy value written for correct responses.
const CORRECT: &str = "1";
/// Transcription prefix marking a hesitation before the response.
const HESITATION_PREFIX: &str = "H_";

/// Per-file scoring counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Total number of rows scored.
    pub rows: usize,
    /// Rows marked correct.
    pub correct: usize,
    /// Rows with the non-response marker.
    pub non_responses: usize,
    /// Rows left as they were read.
    pub unchanged: usize,
}

/// Fills in the accuracy column of a trial table.
///
/// A response is correct when it matches the cue-selected answer form, either
/// bare or with the hesitation prefix. Matching is byte-exact: no trimming,
/// no case folding. Rows that match nothing keep whatever accuracy value the
/// input carried.
pub struct Scorer;

impl Scorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        Self
    }

    /// Score every row in place and return the summary counts.
    pub fn score(&self, table: &mut TrialTable) -> Result<ScoreSummary> {
        let cue = Self::column(table, CUE)?;
        let response = Self::column(table, RESPONSE)?;
        let nl_name = Self::column(table, NL_NAME)?;
        let en_name = Self::column(table, EN_NAME)?;
        let accuracy = Self::column(table, ACCURACY)?;

        let mut summary = ScoreSummary {
            rows: table.row_count(),
            ..Default::default()
        };

        for row in 0..table.row_count() {
            let resp = table.get(row, response).unwrap_or_default().to_string();

            if resp == NON_RESPONSE {
                table.set(row, accuracy, NA.to_string());
                summary.non_responses += 1;
                continue;
            }

            let name_col = if table.get(row, cue) == Some(NL_CUE) {
                nl_name
            } else {
                en_name
            };
            let acceptable = table.get(row, name_col).unwrap_or_default().to_string();

            if resp == acceptable || resp == format!("{}{}", HESITATION_PREFIX, acceptable) {
                table.set(row, accuracy, CORRECT.to_string());
                summary.correct += 1;
            } else {
                summary.unchanged += 1;
            }
        }

        Ok(summary)
    }

    fn column(table: &TrialTable, name: &str) -> Result<usize> {
        table
            .column_index(name)
            .ok_or_else(|| CorrectsError::MissingColumn(name.to_string()))
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(cue: &str, response: &str, nl_name: &str, en_name: &str, accuracy: &str) -> Vec<String> {
        vec![cue, response, nl_name, en_name, accuracy]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn table_with(rows: Vec<Vec<String>>) -> TrialTable {
        let headers = vec!["cue", "response", "nl_name", "en_name", "accuracy"]
            .into_iter()
            .map(String::from)
            .collect();
        TrialTable::new(headers, rows, b',')
    }

    fn accuracy_of(table: &TrialTable, row: usize) -> &str {
        table.get(row, 4).unwrap()
    }

    #[test]
    fn test_nl_cue_matches_nl_name() {
        let mut table = table_with(vec![
            trial("NL", "chien", "chien", "dog", ""),
            trial("NL", "H_chien", "chien", "dog", ""),
        ]);

        let summary = Scorer::new().score(&mut table).unwrap();

        assert_eq!(accuracy_of(&table, 0), "1");
        assert_eq!(accuracy_of(&table, 1), "1");
        assert_eq!(summary.correct, 2);
    }

    #[test]
    fn test_en_cue_matches_en_name() {
        let mut table = table_with(vec![
            trial("EN", "dog", "chien", "dog", ""),
            trial("EN", "H_dog", "chien", "dog", ""),
        ]);

        Scorer::new().score(&mut table).unwrap();

        assert_eq!(accuracy_of(&table, 0), "1");
        assert_eq!(accuracy_of(&table, 1), "1");
    }

    #[test]
    fn test_non_response_marker() {
        let mut table = table_with(vec![trial("NL", ".", "chien", "dog", "")]);

        let summary = Scorer::new().score(&mut table).unwrap();

        assert_eq!(accuracy_of(&table, 0), "NA");
        assert_eq!(summary.non_responses, 1);
    }

    #[test]
    fn test_no_match_leaves_accuracy_untouched() {
        let mut table = table_with(vec![
            trial("EN", "cat", "kat", "dog", ""),
            trial("EN", "cat", "kat", "dog", "0"),
        ]);

        let summary = Scorer::new().score(&mut table).unwrap();

        assert_eq!(accuracy_of(&table, 0), "");
        assert_eq!(accuracy_of(&table, 1), "0");
        assert_eq!(summary.unchanged, 2);
    }

    #[test]
    fn test_matching_is_case_sensitive_and_exact() {
        let mut table = table_with(vec![
            trial("NL", "Chien", "chien", "dog", ""),
            trial("NL", " chien", "chien", "dog", ""),
            trial("NL", "chien ", "chien", "dog", ""),
        ]);

        let summary = Scorer::new().score(&mut table).unwrap();

        assert_eq!(summary.correct, 0);
        assert_eq!(summary.unchanged, 3);
    }

    #[test]
    fn test_wrong_language_response_is_not_correct() {
        // The response matches the other language's name: still wrong
        let mut table = table_with(vec![trial("NL", "dog", "chien", "dog", "")]);

        let summary = Scorer::new().score(&mut table).unwrap();

        assert_eq!(accuracy_of(&table, 0), "");
        assert_eq!(summary.unchanged, 1);
    }

    #[test]
    fn test_non_response_overwrites_existing_accuracy() {
        let mut table = table_with(vec![trial("NL", ".", "chien", "dog", "1")]);

        Scorer::new().score(&mut table).unwrap();

        assert_eq!(accuracy_of(&table, 0), "NA");
    }

    #[test]
    fn test_summary_counts_are_consistent() {
        let mut table = table_with(vec![
            trial("NL", "chien", "chien", "dog", ""),
            trial("EN", ".", "chien", "dog", ""),
            trial("EN", "cat", "chien", "dog", ""),
        ]);

        let summary = Scorer::new().score(&mut table).unwrap();

        assert_eq!(summary.rows, 3);
        assert_eq!(
            summary.rows,
            summary.correct + summary.non_responses + summary.unchanged
        );
    }

    #[test]
    fn test_missing_column_fails() {
        let headers = vec!["cue".to_string(), "response".to_string()];
        let mut table = TrialTable::new(headers, vec![vec!["NL".into(), "kat".into()]], b',');

        let err = Scorer::new().score(&mut table).unwrap_err();

        assert!(matches!(err, CorrectsError::MissingColumn(_)));
    }
}
