//! Permission record table.
//!
//! Permissions are cosmetic: a free-form label keyed by canonical absolute
//! path, never enforced by any command. Only the root path is seeded.
//! Records are not moved or deleted when the tree changes, so a label can
//! outlive (or predate) the entry it names.

use std::collections::HashMap;

/// Permission labels keyed by canonical absolute path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTable {
    records: HashMap<String, String>,
}

impl PermissionTable {
    /// Create the table with the root record seeded.
    pub fn new() -> Self {
        let mut table = Self::default();
        table.set("/", "rwx");
        table
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.records.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.records.contains_key(path)
    }

    /// Insert or overwrite a record. Whether a missing record may be
    /// created is the caller's policy, not the table's.
    pub fn set(&mut self, path: impl Into<String>, label: impl Into<String>) {
        self.records.insert(path.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
