//! Storage layer for the car rental system
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each record kind has its own repository; `Storage` ties them
//! together with the audit log.

pub mod admins;
pub mod cars;
pub mod customers;
pub mod file_io;
pub mod init;
pub mod rentals;

pub use admins::AdminRepository;
pub use cars::CarRepository;
pub use customers::CustomerRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, SeedReport};
pub use rentals::{RentalIndex, RentalIndexRepository};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::RentalPaths;
use crate::error::RentalError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: RentalPaths,
    pub cars: CarRepository,
    pub customers: CustomerRepository,
    pub admins: AdminRepository,
    pub rentals: RentalIndexRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: RentalPaths) -> Result<Self, RentalError> {
        paths.ensure_directories()?;

        Ok(Self {
            cars: CarRepository::new(paths.cars_file()),
            customers: CustomerRepository::new(paths.customers_file()),
            admins: AdminRepository::new(paths.admins_file()),
            rentals: RentalIndexRepository::new(paths.rentals_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn the audit log on or off
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
    }

    pub fn paths(&self) -> &RentalPaths {
        &self.paths
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), RentalError> {
        self.cars.load()?;
        self.customers.load()?;
        self.admins.load()?;
        self.rentals.load()?;
        Ok(())
    }

    /// Load every repository, carrying on past failures
    ///
    /// A repository that fails keeps an empty collection and refuses to save,
    /// so the rest of the system stays usable without clobbering the file.
    pub fn load_each(&mut self) -> Vec<RentalError> {
        [
            self.cars.load(),
            self.customers.load(),
            self.admins.load(),
            self.rentals.load(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), RentalError> {
        self.cars.save()?;
        self.customers.save()?;
        self.admins.save()?;
        self.rentals.save()?;
        Ok(())
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record a modification in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.write_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ));
    }

    /// Record a removal in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    // The data files are already written when this runs, so a failed audit
    // write must not turn a completed operation into an error.
    fn write_audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                log::warn!("Audit entry not recorded: {}", e);
            }
        }
    }
}
