//! Storage initialization
//!
//! Seeds the sample fleet and the default admin account into empty stores.

use crate::audit::EntityType;
use crate::error::RentalError;
use crate::models::{Admin, Car, Money};

use super::Storage;

/// Default admin credentials created on first run
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// What `initialize_storage` added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub cars_seeded: usize,
    pub admin_created: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.cars_seeded == 0 && !self.admin_created
    }
}

/// The five cars every fresh installation starts with
pub fn sample_cars() -> Vec<Car> {
    vec![
        Car::new("1001", "Toyota", "Corolla", 5, Money::from_dollars(50)),
        Car::new("1002", "Honda", "Civic", 5, Money::from_dollars(55)),
        Car::new("1003", "Ford", "Mustang", 4, Money::from_dollars(85)),
        Car::new("1004", "Tesla", "Model 3", 5, Money::from_dollars(95)),
        Car::new("1005", "BMW", "X5", 7, Money::from_dollars(120)),
    ]
}

pub fn default_admin() -> Admin {
    Admin::new(
        DEFAULT_ADMIN_USERNAME,
        DEFAULT_ADMIN_PASSWORD,
        "System",
        "Admin",
    )
}

/// Seed empty stores; stores that already hold records are left alone
///
/// The repositories must already be loaded. A store whose file failed to
/// load is skipped rather than seeded over.
pub fn initialize_storage(storage: &Storage) -> Result<SeedReport, RentalError> {
    storage.paths().ensure_directories()?;

    let mut report = SeedReport::default();

    if storage.cars.is_read_only() {
        log::warn!("Car inventory could not be loaded; skipping sample cars");
    } else if storage.cars.count()? == 0 {
        for car in sample_cars() {
            storage.log_create(EntityType::Car, car.car_id.clone(), Some(car.label()), &car);
            storage.cars.add(car)?;
            report.cars_seeded += 1;
        }
        storage.cars.save()?;
        log::info!("Seeded {} sample cars", report.cars_seeded);
    }

    if storage.admins.is_read_only() {
        log::warn!("Admin accounts could not be loaded; skipping the default admin");
    } else if storage.admins.count()? == 0 {
        let admin = default_admin();
        storage.log_create(
            EntityType::Admin,
            admin.username.clone(),
            Some(admin.full_name()),
            &admin,
        );
        storage.admins.insert(admin)?;
        storage.admins.save()?;
        report.admin_created = true;
        log::info!("Created default admin account '{}'", DEFAULT_ADMIN_USERNAME);
    }

    Ok(report)
}
