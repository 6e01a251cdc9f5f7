//! Submission handlers.
//!
//! The controller hands the completed record to a [`Submitter`] when the last
//! step validates. What happens next (logging, writing to disk) is up to the
//! implementation.

use super::values::FormValues;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receives the full record on final submission.
pub trait Submitter {
    fn submit(&mut self, values: &FormValues) -> Result<()>;
}

impl<F> Submitter for F
where
    F: FnMut(&FormValues) -> Result<()>,
{
    fn submit(&mut self, values: &FormValues) -> Result<()> {
        self(values)
    }
}

/// Emits the record as a structured log event.
#[derive(Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&mut self, values: &FormValues) -> Result<()> {
        let record = serde_json::to_string(values).context("Failed to serialize form values")?;
        info!(record = %record, "Form submitted");
        Ok(())
    }
}

/// One line of a submissions file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

/// Appends every submission as a JSON line to a file.
#[derive(Debug, Clone)]
pub struct JsonLinesSubmitter {
    path: PathBuf,
}

impl JsonLinesSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every record in a submissions file.
    pub fn read_all(path: &Path) -> Result<Vec<SubmissionRecord>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read submissions file: {:?}", path))?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).context("Failed to parse submission record"))
            .collect()
    }
}

impl Submitter for JsonLinesSubmitter {
    fn submit(&mut self, values: &FormValues) -> Result<()> {
        let record = SubmissionRecord {
            submitted_at: Utc::now(),
            values: values.clone(),
        };
        let line = serde_json::to_string(&record).context("Failed to serialize submission")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open submissions file: {:?}", self.path))?;
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write submissions file: {:?}", self.path))?;

        info!(path = ?self.path, "Submission appended");
        Ok(())
    }
}
