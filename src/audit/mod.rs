//! Audit logging for ledger mutations
//!
//! Every successful mutation (expense appended, category created, currency
//! set) is recorded in an append-only JSON-lines log.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::set(EntityType::Currency, "EUR"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
