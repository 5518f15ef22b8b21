//! CSV export of recorded entries.
//!
//! The format is fixed for compatibility with existing exports:
//!
//! - every cell is wrapped in double quotes, with inner quotes doubled,
//!   whether or not the value needs it;
//! - a header row of canonical keys comes first, followed by one row per
//!   entry in store order;
//! - rows are joined with `\n` and there is no trailing newline;
//! - no entries means no output at all, not even a header.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::Field;

/// File name the export is saved under.
pub const EXPORT_FILE_NAME: &str = "acne_tracking_data.csv";

/// MIME type of the export.
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Quote a single cell: wrap in double quotes and double any inner quote.
#[must_use]
pub fn quote_cell(value: &str) -> String {
    let mut cell = String::with_capacity(value.len() + 2);
    cell.push('"');
    for ch in value.chars() {
        if ch == '"' {
            cell.push('"');
        }
        cell.push(ch);
    }
    cell.push('"');
    cell
}

fn csv_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(quote_cell).collect::<Vec<_>>().join(",")
}

/// Serialize entries to CSV text.
#[must_use]
pub fn to_csv(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(csv_row(Field::keys()));
    rows.extend(records.iter().map(|record| csv_row(record.values())));
    rows.join("\n")
}

/// A ready-to-save export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of the contents.
    pub mime_type: &'static str,
    /// UTF-8 CSV text.
    pub contents: String,
    /// Number of entries in the export.
    pub entries: usize,
}

impl Download {
    /// Package the given entries under a custom file name.
    #[must_use]
    pub fn named(file_name: impl Into<String>, records: &[Record]) -> Self {
        let contents = to_csv(records);
        debug!(rows = records.len(), bytes = contents.len(), "Built CSV export");
        Self {
            file_name: file_name.into(),
            mime_type: EXPORT_MIME_TYPE,
            contents,
            entries: records.len(),
        }
    }

    /// Whether the export contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Number of CSV rows, header included.
    ///
    /// A cell holding a line break still belongs to a single row, so this
    /// can be smaller than the number of physical lines in `contents`.
    #[must_use]
    pub fn row_count(&self) -> usize {
        if self.entries == 0 {
            0
        } else {
            self.entries + 1
        }
    }

    /// Write the file into `dir`, creating the directory if needed.
    ///
    /// An existing file with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes()).map_err(|source| Error::ExportWrite {
            path: path.clone(),
            source,
        })?;

        info!("Saved {} to {}", self.mime_type, path.display());
        Ok(path)
    }
}
