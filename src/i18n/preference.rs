//! Parsing of weighted language preference lists.
//!
//! The input has the shape of an HTTP `Accept-Language` header:
//! `lang[;q=weight](,lang[;q=weight])*`. Parsing never fails; segments that
//! cannot be understood are dropped.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// One requested language with its relative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct LangPreference {
    /// Language tag exactly as it appeared in the input (e.g., "fr-FR")
    pub language: String,

    /// Preference weight; always positive once parsed
    pub weight: f32,
}

impl LangPreference {
    pub fn new(language: impl Into<String>, weight: f32) -> Self {
        Self {
            language: language.into(),
            weight,
        }
    }
}

/// Preferences in input order.
pub type UserLangPreferences = Vec<LangPreference>;

// Whole-remainder match for the part after ';'. Whitespace is allowed
// between '=' and the number, nothing is allowed after it. Only decimal
// numbers are accepted: `inf`, `infinity`, `nan` and hex floats such as
// `0x1p-1` drop the segment, unlike a C `%f` scan.
static WEIGHT_REGEX: OnceLock<Regex> = OnceLock::new();

fn weight_regex() -> &'static Regex {
    WEIGHT_REGEX.get_or_init(|| {
        Regex::new(r"^q=[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$")
            .expect("weight pattern is valid")
    })
}

/// Parse a comma-separated preference list.
///
/// Each segment has leading spaces, tabs and newlines stripped. Without a
/// `;` the rest of the segment is the tag with weight 1. With a `;` the tag
/// is everything before it (trailing whitespace kept) and the remainder must
/// be exactly `q=<float>`, otherwise the segment is dropped. Segments with an
/// empty tag or a non-positive weight are dropped as well.
pub fn parse_user_language_preferences(input: &str) -> UserLangPreferences {
    input
        .split(',')
        .filter_map(|segment| {
            let preference = parse_single_preference(segment);
            if preference.is_none() && !segment.trim().is_empty() {
                debug!("Ignoring malformed language preference '{}'", segment);
            }
            preference
        })
        .collect()
}

fn parse_single_preference(segment: &str) -> Option<LangPreference> {
    let segment = segment.trim_start_matches([' ', '\t', '\n']);

    let (language, weight) = match segment.split_once(';') {
        None => (segment, 1.0),
        Some((language, weight_clause)) => (language, parse_weight(weight_clause)?),
    };

    if language.is_empty() || weight <= 0.0 {
        return None;
    }

    Some(LangPreference::new(language, weight))
}

fn parse_weight(clause: &str) -> Option<f32> {
    weight_regex()
        .captures(clause)
        .and_then(|caps| caps.get(1))
        .and_then(|number| number.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> Vec<(String, f32)> {
        parse_user_language_preferences(input)
            .into_iter()
            .map(|p| (p.language, p.weight))
            .collect()
    }

    fn pairs(expected: &[(&str, f32)]) -> Vec<(String, f32)> {
        expected
            .iter()
            .map(|(lang, weight)| (lang.to_string(), *weight))
            .collect()
    }

    // ==================== Well-formed Input Tests ====================

    #[test]
    fn test_single_language_defaults_to_weight_one() {
        assert_eq!(parsed("fr"), pairs(&[("fr", 1.0)]));
    }

    #[test]
    fn test_language_and_weighted_language() {
        assert_eq!(
            parsed("fr-FR, en;q=0.8"),
            pairs(&[("fr-FR", 1.0), ("en", 0.8)])
        );
    }

    #[test]
    fn test_input_order_is_kept() {
        assert_eq!(
            parsed("de;q=0.2,fr;q=0.9,en"),
            pairs(&[("de", 0.2), ("fr", 0.9), ("en", 1.0)])
        );
    }

    #[test]
    fn test_wildcard_is_kept_as_a_tag() {
        assert_eq!(
            parsed("fr-FR, en;q=0.8, *;q=0.1"),
            pairs(&[("fr-FR", 1.0), ("en", 0.8), ("*", 0.1)])
        );
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        assert_eq!(
            parsed("en,\t\n fr;q=0.5"),
            pairs(&[("en", 1.0), ("fr", 0.5)])
        );
    }

    #[test]
    fn test_weight_number_forms() {
        assert_eq!(parsed("a;q=1"), pairs(&[("a", 1.0)]));
        assert_eq!(parsed("a;q=.5"), pairs(&[("a", 0.5)]));
        assert_eq!(parsed("a;q=1."), pairs(&[("a", 1.0)]));
        assert_eq!(parsed("a;q=+0.25"), pairs(&[("a", 0.25)]));
        assert_eq!(parsed("a;q=5e-1"), pairs(&[("a", 0.5)]));
        assert_eq!(parsed("a;q= 0.5"), pairs(&[("a", 0.5)]));
    }

    #[test]
    fn test_weight_above_one_is_kept() {
        assert_eq!(parsed("a;q=2"), pairs(&[("a", 2.0)]));
    }

    // ==================== Whitespace Quirk Tests ====================

    #[test]
    fn test_trailing_space_before_semicolon_is_kept() {
        assert_eq!(parsed("fr ;q=0.5"), pairs(&[("fr ", 0.5)]));
    }

    #[test]
    fn test_trailing_space_without_weight_is_kept() {
        assert_eq!(parsed("en ,fr"), pairs(&[("en ", 1.0), ("fr", 1.0)]));
    }

    // ==================== Malformed Input Tests ====================

    #[test]
    fn test_empty_and_separator_only_inputs() {
        assert!(parsed("").is_empty());
        assert!(parsed(",").is_empty());
        assert!(parsed(" , ,\t").is_empty());
    }

    #[test]
    fn test_non_numeric_weight_drops_segment() {
        assert!(parsed("fr;q=abc").is_empty());
    }

    #[test]
    fn test_trailing_characters_after_weight_drop_segment() {
        assert!(parsed("fr;q=0.5 ").is_empty());
        assert!(parsed("fr;q=0.5x").is_empty());
        assert!(parsed("fr;q=0.5;level=1").is_empty());
    }

    #[test]
    fn test_weight_clause_must_start_with_q() {
        assert!(parsed("fr; q=0.5").is_empty());
        assert!(parsed("fr;Q=0.5").is_empty());
        assert!(parsed("fr;").is_empty());
        assert!(parsed("fr;q=").is_empty());
    }

    #[test]
    fn test_zero_and_negative_weights_are_dropped() {
        assert!(parsed("fr;q=0").is_empty());
        assert!(parsed("fr;q=0.0").is_empty());
        assert!(parsed("fr;q=-0.5").is_empty());
    }

    #[test]
    fn test_empty_language_is_dropped() {
        assert!(parsed(";q=0.5").is_empty());
        assert!(parsed("  ;q=0.5").is_empty());
    }

    #[test]
    fn test_malformed_segments_do_not_affect_others() {
        assert_eq!(
            parsed("fr;q=abc, de;q=0.3,,en"),
            pairs(&[("de", 0.3), ("en", 1.0)])
        );
    }

    #[test]
    fn test_non_decimal_weights_drop_segment() {
        assert!(parsed("fr;q=inf").is_empty());
        assert!(parsed("fr;q=infinity").is_empty());
        assert!(parsed("fr;q=nan").is_empty());
        assert!(parsed("fr;q=0x1p-1").is_empty());
    }
}
