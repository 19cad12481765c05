//! Category vocabulary repository
//!
//! One category name per line, no header. Every addition rewrites the whole
//! file.

use std::path::PathBuf;

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::CategoryVocabulary;

use super::file_io::{read_optional, write_atomic};

/// Outcome of adding a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCategory {
    /// The name was new and has been persisted
    Added(String),
    /// The name was already present; nothing changed
    AlreadyExists(String),
}

impl AddCategory {
    pub fn name(&self) -> &str {
        match self {
            Self::Added(name) | Self::AlreadyExists(name) => name,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Repository for category persistence
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    /// Create a new category store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the vocabulary; a missing file yields the default seed set
    pub fn load(&self) -> LedgerResult<CategoryVocabulary> {
        let vocabulary = match read_optional(&self.path)? {
            Some(contents) => CategoryVocabulary::from_names(contents.lines()),
            None => CategoryVocabulary::default(),
        };

        debug!(count = vocabulary.len(), "loaded categories");
        Ok(vocabulary)
    }

    /// Rewrite the file from a vocabulary
    pub fn save(&self, vocabulary: &CategoryVocabulary) -> LedgerResult<()> {
        write_atomic(&self.path, vocabulary.to_file_contents().as_bytes())
    }

    /// Add a category name
    ///
    /// Duplicates (exact, case-sensitive) are reported, not treated as errors.
    pub fn add(&self, name: &str) -> LedgerResult<AddCategory> {
        let name = CategoryVocabulary::normalize(name)?;
        let mut vocabulary = self.load()?;

        if !vocabulary.insert(name) {
            return Ok(AddCategory::AlreadyExists(name.to_string()));
        }

        self.save(&vocabulary)?;
        debug!(category = name, "added category");
        Ok(AddCategory::Added(name.to_string()))
    }
}
