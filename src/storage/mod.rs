// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::{Course, MeetingTime};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves extracted course identifiers as a JSON array
    pub fn save_courses(&self, label: &str, courses: &[Course]) -> Result<PathBuf, StorageError> {
        self.write_json(&format!("{}_courses.json", label), courses)
    }

    /// Saves extracted meeting records as a JSON array
    pub fn save_meetings(
        &self,
        label: &str,
        meetings: &[MeetingTime],
    ) -> Result<PathBuf, StorageError> {
        self.write_json(&format!("{}_meetings.json", label), meetings)
    }

    /// Saves a summary of the extraction run in JSON format
    pub fn save_run_metadata(
        &self,
        label: &str,
        course_count: usize,
        meeting_count: usize,
    ) -> Result<PathBuf, StorageError> {
        let metadata = serde_json::json!({
            "label": label,
            "course_count": course_count,
            "meeting_count": meeting_count,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        self.write_json(&format!("{}_meta.json", label), &metadata)
    }

    fn write_json<T: serde::Serialize + ?Sized>(
        &self,
        filename: &str,
        value: &T,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);

        let body = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, body)?;

        tracing::info!("Saved {}", file_path.display());

        Ok(file_path)
    }
}
