//! Audit trail for the car rental system
//!
//! Every mutation (car added or removed, customer registered, rental opened
//! or closed, balance topped up) is appended to `audit.log` as one JSON line.
//!
//! - `AuditEntry`: timestamp, operation, entity and before/after snapshots
//! - `AuditLogger`: append-only JSONL writer and reader

mod entry;
mod logger;

pub use entry::{rental_id, AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
