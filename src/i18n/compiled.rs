//! String tables shipped with the catalog server.
//!
//! Each table is a static array sorted by key. English is the source language
//! and carries every message id used by the server; the other tables may be
//! partial and fall back to English per message.

use super::table::{StringEntry, StringTable};

/// Language code of the source tables
pub const SOURCE_LANGUAGE: &str = "en";

const EN: &[StringEntry] = &[
    StringEntry::from_static("book-count", "{{count}} books"),
    StringEntry::from_static("catalog-title", "Content catalog"),
    StringEntry::from_static("download-link-text", "Download"),
    StringEntry::from_static("entry-author", "by {{author}}"),
    StringEntry::from_static("entry-language", "Language: {{language}}"),
    StringEntry::from_static("entry-size", "Size: {{size}}"),
    StringEntry::from_static("feed-title-all", "All entries"),
    StringEntry::from_static("feed-title-new", "New entries"),
    StringEntry::from_static("greeting", "Hello, {{name}}!"),
    StringEntry::from_static("language-name", "English"),
    StringEntry::from_static("no-results", "No results"),
    StringEntry::from_static("no-such-book", "No such book: {{book}}"),
    StringEntry::from_static("search-results-heading", "Search results for \"{{{query}}}\""),
    StringEntry::from_static(
        "search-results-summary",
        "Showing {{start}}-{{end}} of {{count}} results",
    ),
    StringEntry::from_static("search-tooltip", "Search '{{title}}'"),
    StringEntry::from_static(
        "url-not-found",
        "The requested URL \"{{url}}\" was not found on this server.",
    ),
];

const FR: &[StringEntry] = &[
    StringEntry::from_static("book-count", "{{count}} livres"),
    StringEntry::from_static("catalog-title", "Catalogue de contenus"),
    StringEntry::from_static("download-link-text", "Télécharger"),
    StringEntry::from_static("entry-author", "par {{author}}"),
    StringEntry::from_static("entry-language", "Langue : {{language}}"),
    StringEntry::from_static("entry-size", "Taille : {{size}}"),
    StringEntry::from_static("feed-title-all", "Toutes les entrées"),
    StringEntry::from_static("feed-title-new", "Nouvelles entrées"),
    StringEntry::from_static("greeting", "Bonjour, {{name}} !"),
    StringEntry::from_static("language-name", "Français"),
    StringEntry::from_static("no-results", "Aucun résultat"),
    StringEntry::from_static("no-such-book", "Livre introuvable : {{book}}"),
    StringEntry::from_static(
        "search-results-heading",
        "Résultats de recherche pour « {{{query}}} »",
    ),
    StringEntry::from_static(
        "search-results-summary",
        "Résultats {{start}} à {{end}} sur {{count}}",
    ),
    StringEntry::from_static("search-tooltip", "Rechercher dans « {{title}} »"),
    StringEntry::from_static(
        "url-not-found",
        "L'URL demandée « {{url}} » est introuvable sur ce serveur.",
    ),
];

const DE: &[StringEntry] = &[
    StringEntry::from_static("book-count", "{{count}} Bücher"),
    StringEntry::from_static("catalog-title", "Inhaltskatalog"),
    StringEntry::from_static("download-link-text", "Herunterladen"),
    StringEntry::from_static("entry-author", "von {{author}}"),
    StringEntry::from_static("feed-title-all", "Alle Einträge"),
    StringEntry::from_static("feed-title-new", "Neue Einträge"),
    StringEntry::from_static("greeting", "Hallo, {{name}}!"),
    StringEntry::from_static("language-name", "Deutsch"),
    StringEntry::from_static("no-results", "Keine Ergebnisse"),
    StringEntry::from_static("search-tooltip", "„{{title}}“ durchsuchen"),
];

const ES: &[StringEntry] = &[
    StringEntry::from_static("catalog-title", "Catálogo de contenidos"),
    StringEntry::from_static("download-link-text", "Descargar"),
    StringEntry::from_static("greeting", "¡Hola, {{name}}!"),
    StringEntry::from_static("language-name", "Español"),
    StringEntry::from_static("no-results", "Sin resultados"),
];

static TABLES: [StringTable; 4] = [
    StringTable::from_static("de", DE),
    StringTable::from_static(SOURCE_LANGUAGE, EN),
    StringTable::from_static("es", ES),
    StringTable::from_static("fr", FR),
];

/// The full set of compiled tables.
pub fn tables() -> &'static [StringTable] {
    &TABLES
}
