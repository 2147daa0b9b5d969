//! Internationalization (i18n) core for the catalog server.
//!
//! Everything needed to turn a request's language preferences and a message
//! id into display text.
//!
//! # Architecture
//!
//! - `table`: Sorted per-language string tables with binary-search lookup
//! - `compiled`: The tables shipped with the server
//! - `database`: Language code -> table registry with default-language fallback
//! - `preference`: Parser for `Accept-Language`-style preference lists
//! - `selector`: Coverage-weighted choice of the display language
//! - `template`: Mustache rendering and `ParameterizedMessage`
//!
//! The database is built once at startup and passed around by shared
//! reference; there is no global instance.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_i18n::i18n::{
//!     parse_user_language_preferences, select_most_suitable_language, ParameterizedMessage,
//!     StringDatabase,
//! };
//!
//! let db = StringDatabase::compiled("en")?;
//! let prefs = parse_user_language_preferences("fr-FR, fr;q=0.9, en;q=0.5");
//! let lang = select_most_suitable_language(&db, &prefs);
//!
//! let text = ParameterizedMessage::new("book-count")
//!     .with_param("count", 12)
//!     .get_text(&db, &lang)?;
//! ```

pub mod compiled;
mod database;
mod error;
mod preference;
mod selector;
mod table;
mod template;

pub use database::{get_translated_string, DatabaseSummary, LanguageSummary, StringDatabase};
pub use error::{I18nError, Result};
pub use preference::{parse_user_language_preferences, LangPreference, UserLangPreferences};
pub use selector::select_most_suitable_language;
pub use table::{StringEntry, StringTable};
pub use template::{expand_parameterized_string, render_template, ParameterizedMessage, Parameters};
