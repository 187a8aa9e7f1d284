//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{RentalError, RentalResult};

use super::entry::AuditEntry;

/// Writes audit entries to a JSONL file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush
    pub fn log(&self, entry: &AuditEntry) -> RentalResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| RentalError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| RentalError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| RentalError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| RentalError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> RentalResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| RentalError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                RentalError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                RentalError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries
    pub fn read_recent(&self, count: usize) -> RentalResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn car_entry(id: &str) -> AuditEntry {
        AuditEntry::create(EntityType::Car, id, None, &json!({"car_id": id}))
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&car_entry("1001")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Car);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&car_entry(&format!("10{:02}", i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].entity_id, "1007");
        assert_eq!(recent[2].entity_id, "1009");
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_existing_log() {
        let (logger, temp) = create_test_logger();
        logger.log(&car_entry("1001")).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
