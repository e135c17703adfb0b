use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use anyhow::Context;

use crate::models::BookingRecord;

/// Full-width line between records. Listing splits the file on it.
pub const SEPARATOR: &str = "============================================================";
/// Only blocks containing this banner count as bookings when listing.
pub const BANNER: &str = "BOOKING CONFIRMATION";

pub fn format_record(record: &BookingRecord) -> String {
    let mut block = format!(
        "{SEPARATOR}\n{BANNER}\nBooked at: {}\n",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    for (label, value) in record.labelled_values() {
        block.push_str(&format!("{label}: {value}\n"));
    }
    block.push('\n');
    block
}

/// Append-only text file of confirmed bookings.
#[derive(Debug, Clone)]
pub struct BookingRecorder {
    path: PathBuf,
}

impl BookingRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn append(&self, record: &BookingRecord) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        file.write_all(format_record(record).as_bytes())
            .with_context(|| format!("failed to write booking to {}", self.path.display()))?;

        tracing::info!(
            guest = %record.guest_name,
            path = %self.path.display(),
            "booking recorded"
        );
        Ok(())
    }

    /// Stored booking blocks, oldest first. A missing file means no bookings.
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        Ok(content
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|block| !block.is_empty() && block.contains(BANNER))
            .map(str::to_string)
            .collect())
    }
}
