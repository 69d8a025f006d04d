//! CSV writer for scored trial tables.

use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

use crate::error::{CorrectsError, Result};
use crate::input::TrialTable;

/// Write a trial table to a new CSV file.
///
/// The header row comes straight from the table, so output columns keep the
/// input order. The file is opened with `create_new`: an existing file at the
/// output path fails with [`CorrectsError::OutputExists`] and is left intact.
pub fn write_table(table: &TrialTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => CorrectsError::OutputExists(path.to_path_buf()),
            _ => CorrectsError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(table.delimiter)
        .from_writer(BufWriter::new(file));

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush().map_err(|e| CorrectsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
