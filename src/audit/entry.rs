//! Audit entry data structures
//!
//! One entry per change to the rental data. Cars are keyed by car ID,
//! customers and admins by username, and rentals by `username/car_id`
//! (see [`rental_id`]). Snapshots are the record as it is stored on disk,
//! so money shows up in dollars.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Car added, account registered, rental booked, or sample data seeded
    Create,
    /// Balance change, availability flip, or rental closed on return
    Update,
    /// Car removed from the fleet
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

/// Kind of record an entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Car,
    Customer,
    Admin,
    Rental,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Car => "Car",
            EntityType::Customer => "Customer",
            EntityType::Admin => "Admin",
            EntityType::Rental => "Rental",
        })
    }
}

/// Audit key for a rental: a customer holds at most one active rental per car
pub fn rental_id(username: &str, car_id: &str) -> String {
    format!("{}/{}", username, car_id)
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Car ID, username, or `username/car_id` for rentals
    pub entity_id: String,

    /// Car label ("Toyota Corolla") or account holder's full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// e.g. "balance: $500.00 -> $350.00"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: Option<serde_json::Value>,
        after: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let id = entity_id.into();
        let after = snapshot(entity, &id);
        Self::record(Operation::Create, entity_type, id, entity_name, None, after)
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        let id = entity_id.into();
        let (before, after) = (snapshot(before, &id), snapshot(after, &id));
        Self {
            diff_summary,
            ..Self::record(Operation::Update, entity_type, id, entity_name, before, after)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let id = entity_id.into();
        let before = snapshot(entity, &id);
        Self::record(Operation::Delete, entity_type, id, entity_name, before, None)
    }

    /// One line per entry, plus a `Changes:` line when there is a summary
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );
        if let Some(name) = &self.entity_name {
            let _ = write!(output, " ({})", name);
        }
        if let Some(diff) = &self.diff_summary {
            let _ = write!(output, "\n  Changes: {}", diff);
        }
        output
    }
}

fn snapshot<T: Serialize>(record: &T, entity_id: &str) -> Option<serde_json::Value> {
    match serde_json::to_value(record) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Could not snapshot {} for the audit log: {}", entity_id, e);
            None
        }
    }
}
