//! Admin repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RentalError;
use crate::models::Admin;

use super::file_io::{read_json, write_json_atomic, LoadGuard};

/// Repository for admin persistence
pub struct AdminRepository {
    path: PathBuf,
    data: RwLock<Vec<Admin>>,
    guard: LoadGuard,
}

impl AdminRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            guard: LoadGuard::default(),
        }
    }

    pub fn load(&self) -> Result<(), RentalError> {
        let admins: Vec<Admin> = self.guard.record(read_json(&self.path))?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = admins;
        Ok(())
    }

    pub fn save(&self) -> Result<(), RentalError> {
        self.guard.check_writable(&self.path)?;

        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// True when the file failed to load; edits and saves are refused
    pub fn is_read_only(&self) -> bool {
        self.guard.is_failed()
    }

    /// Find the first admin whose credentials match exactly
    pub fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Admin>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .find(|a| a.credentials_match(username, password))
            .cloned())
    }

    pub fn exists(&self, username: &str) -> Result<bool, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().any(|a| a.username == username))
    }

    pub fn insert(&self, admin: Admin) -> Result<(), RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(admin);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_insert_save_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("admins.json");
        let repo = AdminRepository::new(path.clone());
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);

        repo.insert(Admin::new("admin", "admin123", "System", "Admin"))
            .unwrap();
        repo.save().unwrap();

        let repo2 = AdminRepository::new(path);
        repo2.load().unwrap();
        assert!(repo2.exists("admin").unwrap());
        assert!(repo2
            .find_by_credentials("admin", "admin123")
            .unwrap()
            .is_some());
        assert!(repo2.find_by_credentials("admin", "nope").unwrap().is_none());
    }
}
