//! Account service
//!
//! Registration, login and balance top-ups for customers and admins.

use crate::audit::EntityType;
use crate::error::{RentalError, RentalResult};
use crate::models::{Admin, Customer, Money};
use crate::storage::Storage;

/// Who logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Admin(Admin),
    Customer(Customer),
}

impl Session {
    pub fn username(&self) -> &str {
        match self {
            Session::Admin(admin) => &admin.username,
            Session::Customer(customer) => &customer.username,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Admin(_))
    }
}

/// Input for registering a customer
#[derive(Debug, Clone)]
pub struct RegisterCustomerInput {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Negative values are clamped to zero
    pub starting_balance: Money,
}

/// Service for customer and admin accounts
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new customer
    pub fn register_customer(&self, input: RegisterCustomerInput) -> RentalResult<Customer> {
        let balance = if input.starting_balance.is_negative() {
            Money::zero()
        } else {
            input.starting_balance
        };

        let customer = Customer::new(
            input.username,
            input.password,
            input.first_name.trim(),
            input.last_name.trim(),
            balance,
        );

        customer
            .validate()
            .map_err(|e| RentalError::Validation(e.to_string()))?;

        if self.storage.customers.exists(&customer.username)? {
            return Err(RentalError::Duplicate {
                entity_type: "Customer",
                identifier: customer.username,
            });
        }

        self.storage.customers.insert(customer.clone())?;
        self.storage.customers.save()?;

        self.storage.log_create(
            EntityType::Customer,
            customer.username.clone(),
            Some(customer.full_name()),
            &customer,
        );

        Ok(customer)
    }

    /// Register a new admin
    pub fn register_admin(&self, admin: Admin) -> RentalResult<Admin> {
        admin
            .validate()
            .map_err(|e| RentalError::Validation(e.to_string()))?;

        if self.storage.admins.exists(&admin.username)? {
            return Err(RentalError::Duplicate {
                entity_type: "Admin",
                identifier: admin.username,
            });
        }

        self.storage.admins.insert(admin.clone())?;
        self.storage.admins.save()?;

        self.storage.log_create(
            EntityType::Admin,
            admin.username.clone(),
            Some(admin.full_name()),
            &admin,
        );

        Ok(admin)
    }

    /// Check admins first, then customers; exact match, first match wins
    pub fn authenticate(&self, username: &str, password: &str) -> RentalResult<Session> {
        if let Some(admin) = self.storage.admins.find_by_credentials(username, password)? {
            log::debug!("Admin '{}' logged in", username);
            return Ok(Session::Admin(admin));
        }

        if let Some(customer) = self
            .storage
            .customers
            .find_by_credentials(username, password)?
        {
            log::debug!("Customer '{}' logged in", username);
            return Ok(Session::Customer(customer));
        }

        Err(RentalError::InvalidCredentials)
    }

    /// Fresh copy of a stored customer
    pub fn get_customer(&self, username: &str) -> RentalResult<Customer> {
        self.storage
            .customers
            .get(username)?
            .ok_or_else(|| RentalError::customer_not_found(username))
    }

    /// Add funds to a customer's balance
    pub fn add_balance(&self, username: &str, amount: Money) -> RentalResult<Customer> {
        if !amount.is_positive() {
            return Err(RentalError::InvalidAmount(format!(
                "{} (amount must be positive)",
                amount
            )));
        }

        let before = self.get_customer(username)?;
        let mut customer = before.clone();
        customer.balance = customer.balance.checked_add(amount).ok_or_else(|| {
            RentalError::InvalidAmount(format!("{} would overflow the balance", amount))
        })?;

        self.storage.customers.update(customer.clone())?;
        self.storage.customers.save()?;

        self.storage.log_update(
            EntityType::Customer,
            username,
            Some(customer.full_name()),
            &before,
            &customer,
            Some(format!("balance: {} -> {}", before.balance, customer.balance)),
        );

        Ok(customer)
    }
}
