//! Per-language string tables.
//!
//! A table is a slice of `(key, value)` entries sorted by key. Tables are
//! produced ahead of time (see `compiled`) and never change afterwards, so
//! lookup is a plain binary search.

use std::borrow::Cow;

/// A single translated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    key: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl StringEntry {
    /// Create an entry from any owned or borrowed strings.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an entry from string literals (usable in `const` tables).
    pub const fn from_static(key: &'static str, value: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: Cow::Borrowed(value),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// All messages available for one language, sorted by key.
#[derive(Debug, Clone)]
pub struct StringTable {
    language: Cow<'static, str>,
    entries: Cow<'static, [StringEntry]>,
}

impl StringTable {
    /// Build a table from entries that are already strictly sorted by key.
    ///
    /// Ordering is a property of the table source; it is only checked in
    /// debug builds.
    pub fn new(
        language: impl Into<Cow<'static, str>>,
        entries: impl Into<Cow<'static, [StringEntry]>>,
    ) -> Self {
        let table = Self {
            language: language.into(),
            entries: entries.into(),
        };
        debug_assert!(
            table.is_strictly_sorted(),
            "string table '{}' is not strictly sorted by key",
            table.language
        );
        table
    }

    /// Wrap a static, pre-sorted entry array without copying it.
    pub const fn from_static(language: &'static str, entries: &'static [StringEntry]) -> Self {
        Self {
            language: Cow::Borrowed(language),
            entries: Cow::Borrowed(entries),
        }
    }

    /// Look up the value stored under `key`.
    ///
    /// `None` means the key is absent; an empty string is a valid value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|entry| entry.key().cmp(key))
            .ok()
            .map(|index| self.entries[index].value())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn entries(&self) -> &[StringEntry] {
        &self.entries
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that keys are strictly increasing (sorted and unique).
    pub fn is_strictly_sorted(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[0].key() < pair[1].key())
    }
}
