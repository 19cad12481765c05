//! Audit entry data structures
//!
//! The ledger only ever creates records, adds categories and replaces the
//! currency, so those are the operations an entry can describe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Something was added (expense row, category)
    Create,
    /// A value was replaced (currency)
    Set,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Set => write!(f, "SET"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Category,
    Currency,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Category => write!(f, "Category"),
            EntityType::Currency => write!(f, "Currency"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Stable identifier where one exists: the ledger line for an expense,
    /// the name for a category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Human-readable label of the entity (category name, currency code,
    /// expense description)
    pub entity_name: String,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for an added entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_name: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: None,
            entity_name: entity_name.into(),
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Attach an entity id
    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Entry for a replaced value
    pub fn set(entity_type: EntityType, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            timestamp: Utc::now(),
            operation: Operation::Set,
            entity_type,
            entity_id: None,
            after: Some(serde_json::Value::String(value.clone())),
            entity_name: value,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let id = match (&self.entity_type, &self.entity_id) {
            (EntityType::Expense, Some(id)) => format!(" at line {}", id),
            _ => String::new(),
        };
        format!(
            "[{}] {} {}{} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            id,
            self.entity_name
        )
    }
}
