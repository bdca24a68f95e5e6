use crate::domain::model::RawRecord;
use crate::utils::error::{ConvertError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Streams the rows of a headed CSV file as column-name/value records.
///
/// The reader itself only holds the path: every call to [`rows`] re-opens
/// the file, so iteration is restartable. The file handle lives inside the
/// returned iterator and is closed when it is dropped, whether the caller
/// drained it, hit an error, or abandoned it early.
///
/// [`rows`]: RowReader::rows
pub struct RowReader {
    path: PathBuf,
}

impl RowReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn rows(&self) -> Result<RowIter> {
        let file = File::open(&self.path).map_err(|e| ConvertError::FileAccessError {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        Ok(RowIter {
            inner: reader.into_deserialize(),
        })
    }
}

pub struct RowIter {
    inner: csv::DeserializeRecordsIntoIter<File, HashMap<String, String>>,
}

impl Iterator for RowIter {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.inner.next()?;
        Some(
            row.map(|data| RawRecord { data })
                .map_err(ConvertError::from),
        )
    }
}
