//! Session context
//!
//! Holds what the presentation layer needs between actions: storage handles,
//! settings, the current category vocabulary and the currency label. Every
//! mutation writes through to storage before the held copy is updated.

use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::config::{LedgerPaths, Settings};
use crate::display::format_amount;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, CategoryVocabulary, ExpenseInput, ExpenseRecord};
use crate::reports::{summarize, Summary};
use crate::storage::{initialize_storage, AddCategory, LedgerLoad, Storage};

/// An open ledger
pub struct Session {
    storage: Storage,
    settings: Settings,
    vocabulary: CategoryVocabulary,
    currency: Option<String>,
}

impl Session {
    /// Open the ledger at `paths`, creating first-run files as needed
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        Self::open_with_settings(paths, settings)
    }

    /// Open with explicit settings instead of the persisted ones
    pub fn open_with_settings(paths: LedgerPaths, settings: Settings) -> LedgerResult<Self> {
        initialize_storage(&paths)?;

        let storage = Storage::new(paths, &settings)?;
        let vocabulary = storage.categories.load()?;
        let currency = storage.currency.load()?;

        Ok(Self {
            storage,
            settings,
            vocabulary,
            currency,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current vocabulary in insertion order; use `sorted()` for menus
    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// True until a currency label has been set
    pub fn needs_currency(&self) -> bool {
        self.currency.is_none()
    }

    /// Validate and persist a new expense
    ///
    /// The category must be in the current vocabulary.
    pub fn add_expense(&mut self, input: ExpenseInput) -> LedgerResult<ExpenseRecord> {
        let record = input.into_record()?;

        if !self.vocabulary.contains(&record.category) {
            return Err(LedgerError::validation(format!(
                "Unknown category '{}'",
                record.category
            )));
        }

        let line = self.storage.expenses.append(&record)?;
        info!(line, category = %record.category, amount = %record.amount, "expense added");

        self.storage.log_audit(
            &AuditEntry::create(EntityType::Expense, record.description.clone(), &record)
                .with_id(line),
        )?;

        Ok(record)
    }

    /// Add a category and refresh the held vocabulary
    pub fn create_category(&mut self, name: &str) -> LedgerResult<AddCategory> {
        let outcome = self.storage.categories.add(name)?;
        self.vocabulary = self.storage.categories.load()?;

        if let AddCategory::Added(name) = &outcome {
            info!(category = %name, "category created");
            self.storage.log_audit(
                &AuditEntry::create(EntityType::Category, name.clone(), name).with_id(name),
            )?;
        }

        Ok(outcome)
    }

    /// Replace the currency label
    pub fn set_currency(&mut self, code: &str) -> LedgerResult<()> {
        self.storage.currency.set(code)?;
        self.currency = self.storage.currency.load()?;

        info!(currency = code, "currency set");
        self.storage
            .log_audit(&AuditEntry::set(EntityType::Currency, code))
    }

    /// All expenses, applying the configured malformed-row policy
    pub fn expenses(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        self.storage.expenses.load_all()
    }

    /// All expenses plus the rows that could not be read
    pub fn expenses_with_report(&self) -> LedgerResult<LedgerLoad> {
        self.storage.expenses.load_report()
    }

    /// Summary over the full ledger
    pub fn summary(&self) -> LedgerResult<Summary> {
        Ok(summarize(&self.expenses()?))
    }

    /// Amount with the session's currency suffix
    pub fn format_amount(&self, amount: Amount) -> String {
        format_amount(amount, self.currency())
    }
}
