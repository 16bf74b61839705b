//! JSON-lines file sink
//!
//! One `SinkEntry` per line, appended and flushed as it happens.

use super::{PersistenceSink, SinkEntry, SinkError};
use crate::game::{GuessRecord, Outcome};
use std::fs::{File, OpenOptions, create_dir_all};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSink {
    /// Open `path` for appending, creating it and its parent directories
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &SinkEntry) -> Result<(), SinkError> {
        let line = serde_json::to_string(entry)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl PersistenceSink for JsonlSink {
    fn record_guess(&self, player_id: &str, record: &GuessRecord) -> Result<(), SinkError> {
        self.append(&SinkEntry::guess(player_id, record))
    }

    fn record_outcome(&self, player_id: &str, outcome: &Outcome) -> Result<(), SinkError> {
        self.append(&SinkEntry::outcome(player_id, outcome))
    }
}

/// Read every entry of a JSON-lines record file
///
/// Blank lines are skipped. Lines that do not parse are skipped with a warning so
/// one torn write does not hide the rest of the history.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<SinkEntry>, SinkError> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!(line = index + 1, error = %e, "skipping unreadable record"),
        }
    }

    Ok(entries)
}

/// Read only the outcomes of a JSON-lines record file, paired with their player
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn read_outcomes<P: AsRef<Path>>(path: P) -> Result<Vec<(String, Outcome)>, SinkError> {
    Ok(read_entries(path)?
        .into_iter()
        .filter_map(|entry| match entry {
            SinkEntry::Outcome {
                player_id, outcome, ..
            } => Some((player_id, outcome)),
            SinkEntry::Guess { .. } => None,
        })
        .collect())
}
