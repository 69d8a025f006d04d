//! Output path derivation and CSV writing.

mod writer;

pub use writer::write_table;

use std::path::{Path, PathBuf};

/// Default suffix inserted before the extension for output names.
pub const DEFAULT_SUFFIX: &str = "_out";

/// Generate the scored output path for an input file.
///
/// The suffix is inserted before the file extension; extensionless inputs get
/// the bare suffix appended.
///
/// # Example
///
/// ```
/// use corrects::output::scored_path;
///
/// let path = scored_path("data/trials.csv", "_out");
/// assert_eq!(path.to_string_lossy(), "data/trials_out.csv");
/// ```
pub fn scored_path(input: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let input = input.as_ref();
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();

    match input.extension() {
        Some(ext) => {
            input.with_file_name(format!("{}{}.{}", stem, suffix, ext.to_string_lossy()))
        }
        None => input.with_file_name(format!("{}{}", stem, suffix)),
    }
}
