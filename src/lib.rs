//! Runtime internationalization for a content catalog server: compiled string
//! tables, language negotiation and message templates.

pub mod config;
pub mod i18n;
