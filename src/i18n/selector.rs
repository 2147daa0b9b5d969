//! Picking the display language for a request.

use super::database::StringDatabase;
use super::preference::LangPreference;
use tracing::debug;

/// Choose the best language for a set of user preferences.
///
/// Each candidate scores `weight * string_count(language)`, so a requested
/// language with poor translation coverage loses to a less preferred one
/// that is well covered. The default language is the starting point with a
/// score of 0: it is returned when no candidate scores positively. On equal
/// scores the earlier candidate wins.
pub fn select_most_suitable_language(db: &StringDatabase, prefs: &[LangPreference]) -> String {
    let mut best_language = db.default_language();
    let mut best_score = 0.0_f32;

    for preference in prefs {
        let score = preference.weight * db.string_count(&preference.language) as f32;
        if score > best_score {
            best_score = score;
            best_language = &preference.language;
        }
    }

    debug!(
        "Selected language '{}' (score {}) from {} candidates",
        best_language,
        best_score,
        prefs.len()
    );

    best_language.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{parse_user_language_preferences, StringEntry, StringTable};

    fn table(language: &'static str, size: usize) -> StringTable {
        let entries: Vec<StringEntry> = (0..size)
            .map(|i| StringEntry::new(format!("msg-{:04}", i), format!("{} {}", language, i)))
            .collect();
        StringTable::new(language, entries)
    }

    fn test_db() -> StringDatabase {
        StringDatabase::new(
            [table("en", 1000), table("de", 500), table("fr", 10), table("it", 20)],
            "en",
        )
        .unwrap()
    }

    fn select(input: &str) -> String {
        select_most_suitable_language(&test_db(), &parse_user_language_preferences(input))
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_empty_preferences_select_default() {
        assert_eq!(select_most_suitable_language(&test_db(), &[]), "en");
    }

    #[test]
    fn test_unknown_languages_select_default() {
        assert_eq!(select("tlh, xx;q=0.5, *;q=0.1"), "en");
    }

    // ==================== Scoring Tests ====================

    #[test]
    fn test_single_known_language() {
        assert_eq!(select("fr"), "fr");
    }

    #[test]
    fn test_coverage_outweighs_preference() {
        // 0.9 * 10 = 9 < 0.1 * 500 = 50
        assert_eq!(select("fr;q=0.9, de;q=0.1"), "de");
    }

    #[test]
    fn test_preference_decides_between_similar_coverage() {
        // 1.0 * 10 = 10 > 0.2 * 20 = 4
        assert_eq!(select("fr, it;q=0.2"), "fr");
    }

    #[test]
    fn test_default_language_can_be_requested() {
        assert_eq!(select("de, en;q=0.9"), "en");
    }

    #[test]
    fn test_equal_scores_keep_first_candidate() {
        // 1.0 * 10 == 0.5 * 20
        assert_eq!(select("fr, it;q=0.5"), "fr");
        assert_eq!(select("it;q=0.5, fr"), "it");
    }

    #[test]
    fn test_tag_with_trailing_space_matches_no_table() {
        assert_eq!(select("fr ;q=1"), "en");
    }

    #[test]
    fn test_selection_is_repeatable() {
        let db = test_db();
        let prefs = parse_user_language_preferences("fr;q=0.9, de;q=0.1, it");
        let first = select_most_suitable_language(&db, &prefs);
        let second = select_most_suitable_language(&db, &prefs);
        assert_eq!(first, second);
    }
}
