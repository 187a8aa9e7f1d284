use car_rental::config::paths::RentalPaths;
use car_rental::models::{Money, RentalStatus};
use car_rental::reports::{ActiveRentalsReport, CustomerSummaryReport, RentalHistoryReport};
use car_rental::services::{AccountService, InventoryService, RegisterCustomerInput, RentalService};
use car_rental::storage::{initialize_storage, Storage};
use car_rental::RentalError;
use tempfile::TempDir;

fn open_storage(dir: &TempDir) -> Storage {
    let paths = RentalPaths::with_base_dir(dir.path().to_path_buf());
    let mut storage = Storage::new(paths).unwrap();
    storage.load_all().unwrap();
    initialize_storage(&storage).unwrap();
    storage
}

fn register(storage: &Storage, username: &str, dollars: i64) {
    AccountService::new(storage)
        .register_customer(RegisterCustomerInput {
            username: username.to_string(),
            password: "pw".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            starting_balance: Money::from_dollars(dollars),
        })
        .unwrap();
}

#[test]
fn late_return_scenario_survives_reload() {
    let dir = TempDir::new().unwrap();
    {
        let storage = open_storage(&dir);
        register(&storage, "alice", 500);
        let rentals = RentalService::new(&storage);

        let rental = rentals
            .rent("alice", "1001", "2024-01-01", "2024-01-03")
            .unwrap();
        assert_eq!(rental.days, 3);
        assert_eq!(rental.total_cost, Money::from_dollars(150));

        let receipt = rentals.return_car("alice", "1001", "2024-01-05").unwrap();
        assert_eq!(receipt.fine, Money::from_dollars(150));
    }

    // Fresh process view of the same files
    let storage = open_storage(&dir);
    let alice = AccountService::new(&storage).get_customer("alice").unwrap();
    assert_eq!(alice.balance, Money::from_dollars(200));
    assert_eq!(alice.rentals.len(), 1);
    assert_eq!(alice.rentals[0].status, RentalStatus::Completed);

    let index = storage.rentals.get_for("alice").unwrap().unwrap();
    assert_eq!(index, alice.rentals);
    assert!(InventoryService::new(&storage)
        .get_by_id("1001")
        .unwrap()
        .unwrap()
        .available);
}

#[test]
fn at_most_one_active_rental_per_customer() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    register(&storage, "alice", 5000);
    let rentals = RentalService::new(&storage);

    let attempts = [
        ("1001", "2024-01-01", "2024-01-02"),
        ("1002", "2024-01-01", "2024-01-02"),
        ("1003", "2024-01-03", "2024-01-04"),
    ];
    for (car_id, start, end) in attempts {
        let _ = rentals.rent("alice", car_id, start, end);
        let customer = AccountService::new(&storage).get_customer("alice").unwrap();
        assert!(customer.active_rental_count() <= 1);
    }

    rentals.return_car("alice", "1001", "2024-01-02").unwrap();
    rentals
        .rent("alice", "1003", "2024-01-03", "2024-01-04")
        .unwrap();

    let customer = AccountService::new(&storage).get_customer("alice").unwrap();
    assert_eq!(customer.active_rental_count(), 1);
    assert_eq!(customer.rentals.len(), 2);
}

#[test]
fn car_cannot_be_rented_twice() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    register(&storage, "alice", 500);
    register(&storage, "bob", 500);
    let rentals = RentalService::new(&storage);

    rentals
        .rent("alice", "1004", "2024-01-01", "2024-01-01")
        .unwrap();
    let err = rentals
        .rent("bob", "1004", "2024-01-01", "2024-01-01")
        .unwrap_err();
    assert!(matches!(err, RentalError::CarUnavailable(_)));

    let err = InventoryService::new(&storage).remove("1004").unwrap_err();
    assert!(err.to_string().contains("currently rented"));
}

#[test]
fn reports_cover_all_customers() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    register(&storage, "alice", 500);
    register(&storage, "bob", 500);
    let rentals = RentalService::new(&storage);

    rentals
        .rent("alice", "1001", "2024-01-01", "2024-01-02")
        .unwrap();
    rentals.rent("bob", "1002", "2024-01-01", "2024-01-02").unwrap();
    rentals.return_car("bob", "1002", "2024-01-02").unwrap();

    let active = ActiveRentalsReport::generate(&storage).unwrap();
    assert_eq!(active.rows.len(), 1);
    assert_eq!(active.rows[0].username, "alice");

    let summaries = CustomerSummaryReport::generate(&storage).unwrap();
    let bob = summaries
        .customers
        .iter()
        .find(|s| s.username == "bob")
        .unwrap();
    assert_eq!((bob.active_count, bob.completed_count), (0, 1));

    let history = RentalHistoryReport::generate(&storage, "bob")
        .unwrap()
        .unwrap();
    assert_eq!(history.entries[0].car_label, "Honda Civic");
    assert!(RentalHistoryReport::generate(&storage, "carol")
        .unwrap()
        .is_none());
}

#[test]
fn corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    let paths = RentalPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure_directories().unwrap();
    std::fs::write(paths.cars_file(), "{ not json").unwrap();

    let mut storage = Storage::new(paths).unwrap();
    let err = storage.load_all().unwrap_err();
    assert!(matches!(err, RentalError::Storage(_)));
}
