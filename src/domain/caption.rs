//! Caption parsing rules: title/year extraction and category classification.
//!
//! Pure text processing, no I/O. Always total: any input (including empty)
//! yields a well-formed result.

use crate::domain::entities::{Category, ParsedCaption};
use regex::Regex;
use std::sync::LazyLock;

/// 4-digit year token in [1900, 2099].
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("valid year pattern"));

/// Bracketed/parenthesized/braced segments, dropped entirely.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]|\(.*?\)|\{.*?\}").expect("valid bracket pattern"));

/// Anything that is neither a word character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word pattern"));

/// Regional-language keywords; any match classifies as `South`.
const SOUTH_KEYWORDS: &[&str] = &["tamil", "telugu", "malayalam", "kannada"];

/// Extract a candidate title and year from raw caption text.
///
/// The first year token is pulled out, bracketed segments and punctuation
/// are stripped, whitespace is collapsed, and the remaining words are
/// title-cased. Empty input yields an empty title and no year.
pub fn parse_caption(caption: &str) -> ParsedCaption {
    if caption.is_empty() {
        return ParsedCaption {
            title: String::new(),
            year: None,
        };
    }

    let year = YEAR.find(caption).map(|m| m.as_str().to_string());

    let text = caption.to_lowercase();
    let text = BRACKETED.replace_all(&text, " ");
    let mut text = NON_WORD.replace_all(&text, " ").into_owned();
    if let Some(y) = &year {
        text = text.replace(y.as_str(), " ");
    }

    let title = text
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    ParsedCaption { title, year }
}

/// Capitalize the first letter of an already-lowercased word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Map caption keywords to a content category.
///
/// Priority order: regional-language keywords win, then "dubbed"/"dual
/// audio", then "hindi". Case-insensitive substring matching; the default
/// is `Hollywood`.
pub fn classify_category(caption: &str) -> Category {
    let c = caption.to_lowercase();
    if SOUTH_KEYWORDS.iter().any(|k| c.contains(k)) {
        return Category::South;
    }
    if c.contains("dubbed") || c.contains("dual audio") {
        return Category::Hollywood;
    }
    if c.contains("hindi") {
        return Category::Bollywood;
    }
    Category::Hollywood
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_year_and_strips_brackets() {
        let parsed = parse_caption("Inception (2010) [Hindi Dubbed]");
        assert_eq!(parsed.title, "Inception");
        assert_eq!(parsed.year.as_deref(), Some("2010"));
    }

    #[test]
    fn test_parse_year_outside_brackets_removed_from_title() {
        let parsed = parse_caption("Interstellar 2014 IMAX.720p");
        assert_eq!(parsed.year.as_deref(), Some("2014"));
        assert!(!parsed.title.contains("2014"));
        assert_eq!(parsed.title, "Interstellar Imax 720p");
    }

    #[test]
    fn test_parse_empty_caption() {
        let parsed = parse_caption("");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.year, None);
    }

    #[test]
    fn test_parse_no_year() {
        let parsed = parse_caption("The Dark Knight");
        assert_eq!(parsed.year, None);
        assert_eq!(parsed.title, "The Dark Knight");
    }

    #[test]
    fn test_parse_only_punctuation_yields_empty_title() {
        let parsed = parse_caption("*** --- !!!");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.year, None);
    }

    #[test]
    fn test_parse_out_of_range_year_ignored() {
        let parsed = parse_caption("Movie 1850");
        assert_eq!(parsed.year, None);
        assert_eq!(parsed.title, "Movie 1850");
    }

    #[test]
    fn test_parse_idempotent_on_own_output() {
        let first = parse_caption("jailer.2023 {WEB-DL} tamil");
        let second = parse_caption(&first.title);
        assert_eq!(second.title, first.title);
    }

    #[test]
    fn test_parse_multiple_years_first_wins() {
        // Only the first year token is extracted; any later one stays in
        // the title, so re-parsing such a title extracts it as the year.
        let parsed = parse_caption("1917 2012");
        assert_eq!(parsed.year.as_deref(), Some("1917"));
        assert_eq!(parsed.title, "2012");

        let reparsed = parse_caption(&parsed.title);
        assert_eq!(reparsed.year.as_deref(), Some("2012"));
        assert_eq!(reparsed.title, "");
    }

    #[test]
    fn test_classify_south_keyword_wins() {
        assert_eq!(classify_category("Jailer Tamil Full Movie"), Category::South);
        assert_eq!(classify_category("TELUGU version"), Category::South);
        assert_eq!(classify_category("Malayalam hindi dubbed"), Category::South);
    }

    #[test]
    fn test_classify_dubbed_wins_over_hindi() {
        assert_eq!(
            classify_category("Inception (2010) [Hindi Dubbed]"),
            Category::Hollywood
        );
        assert_eq!(classify_category("Dual Audio hindi"), Category::Hollywood);
    }

    #[test]
    fn test_classify_hindi_alone_is_bollywood() {
        assert_eq!(classify_category("3 Idiots Hindi"), Category::Bollywood);
    }

    #[test]
    fn test_classify_default_and_empty() {
        assert_eq!(classify_category("Oppenheimer 2023"), Category::Hollywood);
        assert_eq!(classify_category(""), Category::Hollywood);
    }
}
