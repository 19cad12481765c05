//! Category vocabulary
//!
//! The ordered set of category names offered when entering an expense. It
//! only grows; names are compared case-sensitively.

use crate::error::{LedgerError, LedgerResult};

/// Categories seeded on first run
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Food", "Transport", "Entertainment", "Utilities", "Shopping"];

/// Ordered set of unique category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocabulary {
    names: Vec<String>,
}

impl CategoryVocabulary {
    /// An empty vocabulary
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a vocabulary from names, trimming each, skipping blanks and
    /// keeping the first occurrence of duplicates
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::empty();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !vocabulary.contains(name) {
                vocabulary.names.push(name.to_string());
            }
        }
        vocabulary
    }

    /// Normalize a user-supplied category name
    ///
    /// Rejects empty names and names that would break the one-per-line file.
    pub fn normalize(name: &str) -> LedgerResult<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::validation("Category name cannot be empty"));
        }
        if name.contains(['\n', '\r']) {
            return Err(LedgerError::validation(
                "Category name cannot contain line breaks",
            ));
        }
        Ok(name)
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Insert a name; returns false if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names sorted alphabetically, for a selection menu
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// File representation: one name per line, no trailing newline
    pub fn to_file_contents(&self) -> String {
        self.names.join("\n")
    }
}

impl Default for CategoryVocabulary {
    /// The first-run seed set
    fn default() -> Self {
        Self::from_names(DEFAULT_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let vocabulary = CategoryVocabulary::default();
        assert_eq!(vocabulary.len(), 5);
        assert_eq!(vocabulary.iter().next(), Some("Food"));
        assert!(vocabulary.contains("Shopping"));
    }

    #[test]
    fn test_insert_is_case_sensitive() {
        let mut vocabulary = CategoryVocabulary::default();
        assert!(!vocabulary.insert("Food"));
        assert!(vocabulary.insert("food"));
        assert_eq!(vocabulary.len(), 6);
    }

    #[test]
    fn test_from_names_dedupes_and_trims() {
        let vocabulary = CategoryVocabulary::from_names(["Rent", " Rent ", "", "  ", "Gym"]);
        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["Rent", "Gym"]);
    }

    #[test]
    fn test_sorted_keeps_insertion_order_intact() {
        let vocabulary = CategoryVocabulary::from_names(["Zoo", "Apple", "Milk"]);
        assert_eq!(vocabulary.sorted(), vec!["Apple", "Milk", "Zoo"]);
        assert_eq!(vocabulary.iter().next(), Some("Zoo"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(CategoryVocabulary::normalize("  Pets ").unwrap(), "Pets");
        assert!(CategoryVocabulary::normalize("   ").is_err());
        assert!(CategoryVocabulary::normalize("Pets\nVet").is_err());
    }

    #[test]
    fn test_file_contents() {
        let vocabulary = CategoryVocabulary::from_names(["A", "B"]);
        assert_eq!(vocabulary.to_file_contents(), "A\nB");
    }
}
