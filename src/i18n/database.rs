//! String database: every compiled table indexed by language code.
//!
//! The database is built once during startup and then only read, so a shared
//! reference can be handed to any number of request handlers.

use super::compiled;
use super::error::{I18nError, Result};
use super::table::StringTable;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Immutable registry of string tables with default-language fallback.
#[derive(Debug, Clone)]
pub struct StringDatabase {
    tables: Vec<StringTable>,
    /// language code -> position in `tables`
    index: BTreeMap<String, usize>,
    default_index: usize,
}

impl StringDatabase {
    /// Build the database from a set of tables.
    ///
    /// If two tables share a language code the later one wins.
    ///
    /// # Errors
    /// Returns `MissingDefaultLanguageTable` when no table is provided for
    /// `default_language`.
    pub fn new(
        tables: impl IntoIterator<Item = StringTable>,
        default_language: &str,
    ) -> Result<Self> {
        let mut slots: Vec<StringTable> = Vec::new();
        let mut index: BTreeMap<String, usize> = BTreeMap::new();

        for table in tables {
            let existing = index.get(table.language()).copied();
            match existing {
                Some(slot) => slots[slot] = table,
                None => {
                    index.insert(table.language().to_string(), slots.len());
                    slots.push(table);
                }
            }
        }

        let default_index = *index.get(default_language).ok_or_else(|| {
            I18nError::MissingDefaultLanguageTable {
                language: default_language.to_string(),
            }
        })?;

        info!(
            "Built string database with {} languages (default: {})",
            slots.len(),
            default_language
        );

        Ok(Self {
            tables: slots,
            index,
            default_index,
        })
    }

    /// Build the database from the tables compiled into the crate.
    pub fn compiled(default_language: &str) -> Result<Self> {
        Self::new(compiled::tables().iter().cloned(), default_language)
    }

    /// Look up `key` for `lang`, falling back to the default language.
    ///
    /// The fallback applies both when `lang` has no table and when its table
    /// lacks the key.
    ///
    /// # Errors
    /// Returns `InvalidMessageId` if the default table lacks the key too.
    pub fn get(&self, lang: &str, key: &str) -> Result<&str> {
        if let Some(value) = self.strings_for(lang).get(key) {
            return Ok(value);
        }

        debug!(
            "Message '{}' missing for '{}', using {}",
            key,
            lang,
            self.default_language()
        );

        self.default_table()
            .get(key)
            .ok_or_else(|| I18nError::InvalidMessageId {
                key: key.to_string(),
            })
    }

    /// Number of strings available for `lang`; 0 for unknown languages.
    pub fn string_count(&self, lang: &str) -> usize {
        self.table(lang).map_or(0, StringTable::len)
    }

    pub fn default_language(&self) -> &str {
        self.default_table().language()
    }

    /// All known language codes, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn contains_language(&self, lang: &str) -> bool {
        self.index.contains_key(lang)
    }

    /// Per-language entry counts, for diagnostics.
    pub fn summary(&self) -> DatabaseSummary {
        DatabaseSummary {
            default_language: self.default_language().to_string(),
            languages: self
                .languages()
                .map(|language| LanguageSummary {
                    language: language.to_string(),
                    string_count: self.string_count(language),
                })
                .collect(),
        }
    }

    fn table(&self, lang: &str) -> Option<&StringTable> {
        self.index.get(lang).map(|&slot| &self.tables[slot])
    }

    /// Table used for key lookup: the default table stands in for unknown
    /// languages. Counting goes through `table` instead.
    fn strings_for(&self, lang: &str) -> &StringTable {
        self.table(lang).unwrap_or_else(|| self.default_table())
    }

    fn default_table(&self) -> &StringTable {
        &self.tables[self.default_index]
    }
}

/// Translate `key` into `lang`, returning an owned string.
pub fn get_translated_string(db: &StringDatabase, lang: &str, key: &str) -> Result<String> {
    db.get(lang, key).map(str::to_string)
}

/// Snapshot of the database contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSummary {
    pub default_language: String,
    pub languages: Vec<LanguageSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub language: String,
    pub string_count: usize,
}
