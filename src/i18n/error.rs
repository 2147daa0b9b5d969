//! Error types for string lookup and database construction.

use thiserror::Error;

/// Errors raised by the i18n core.
///
/// Both variants describe data or programming errors rather than transient
/// conditions, so callers should never retry on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The message key is missing even from the default-language table.
    #[error("Invalid message id: {key}")]
    InvalidMessageId { key: String },

    /// The table set handed to the database has no default-language table.
    #[error("No string table for default language '{language}'")]
    MissingDefaultLanguageTable { language: String },
}

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;
