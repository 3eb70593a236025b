//! # Match/Replace Primitive
//!
//! Literal, case-sensitive replacement inside a single string value,
//! producing the replaced string and an HTML fragment that shows each
//! replacement next to the struck-through original.
//!
//! ## Markup
//!
//! Each occurrence renders as the insertion markup around the replacement,
//! immediately followed by the deletion markup around the matched text:
//!
//! ```text
//! <strong style='color: green;'>NEW</strong><del><em style='color: red;'>OLD</em></del>
//! ```
//!
//! Text between occurrences is copied verbatim into both outputs. Nothing
//! is HTML-escaped; the renderer treats the fragment as trusted markup.

use serde::{Deserialize, Serialize};

/// Opening tag of the insertion markup.
pub const INSERT_OPEN: &str = "<strong style='color: green;'>";
/// Closing tag of the insertion markup.
pub const INSERT_CLOSE: &str = "</strong>";
/// Opening tags of the deletion markup.
pub const DELETE_OPEN: &str = "<del><em style='color: red;'>";
/// Closing tags of the deletion markup.
pub const DELETE_CLOSE: &str = "</em></del>";

/// The tags wrapped around inserted and deleted text in a diff fragment.
///
/// Defaults to the editor's green-strong / red-struck-emphasis markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffMarkup {
    pub insert_open: String,
    pub insert_close: String,
    pub delete_open: String,
    pub delete_close: String,
}

impl Default for DiffMarkup {
    fn default() -> Self {
        Self {
            insert_open: INSERT_OPEN.to_string(),
            insert_close: INSERT_CLOSE.to_string(),
            delete_open: DELETE_OPEN.to_string(),
            delete_close: DELETE_CLOSE.to_string(),
        }
    }
}

impl DiffMarkup {
    /// Append the fragment for one occurrence: inserted text first, then
    /// the deleted original.
    pub fn push_change(&self, out: &mut String, inserted: &str, deleted: &str) {
        out.push_str(&self.insert_open);
        out.push_str(inserted);
        out.push_str(&self.insert_close);
        out.push_str(&self.delete_open);
        out.push_str(deleted);
        out.push_str(&self.delete_close);
    }
}

/// Result of matching a single string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Number of occurrences replaced.
    pub count: usize,
    /// The value after replacement; equal to the input when `count == 0`.
    pub replaced: String,
    /// HTML fragment, or `None` when nothing matched (pass-through).
    pub diff: Option<String>,
}

impl MatchResult {
    fn unchanged(value: &str) -> Self {
        Self {
            count: 0,
            replaced: value.to_string(),
            diff: None,
        }
    }

    /// Returns true when at least one occurrence was replaced.
    pub fn is_match(&self) -> bool {
        self.count > 0
    }
}

/// Replace every occurrence of `search` in `value` using the default markup.
///
/// See [`match_replace_with`].
pub fn match_replace(value: &str, search: &str, replacement: &str, match_whole: bool) -> MatchResult {
    match_replace_with(value, search, replacement, match_whole, &DiffMarkup::default())
}

/// Replace `search` in `value`.
///
/// With `match_whole`, only a value exactly equal to `search` matches and is
/// replaced as a whole. Otherwise every non-overlapping occurrence, scanned
/// left to right, is replaced. An empty `search` never matches.
pub fn match_replace_with(
    value: &str,
    search: &str,
    replacement: &str,
    match_whole: bool,
    markup: &DiffMarkup,
) -> MatchResult {
    if search.is_empty() {
        return MatchResult::unchanged(value);
    }

    if match_whole {
        if value != search {
            return MatchResult::unchanged(value);
        }
        let mut html = String::new();
        markup.push_change(&mut html, replacement, value);
        return MatchResult {
            count: 1,
            replaced: replacement.to_string(),
            diff: Some(html),
        };
    }

    let mut count = 0;
    let mut replaced = String::with_capacity(value.len());
    let mut html = String::new();
    let mut last = 0;

    for (start, matched) in value.match_indices(search) {
        let between = &value[last..start];
        replaced.push_str(between);
        replaced.push_str(replacement);
        html.push_str(between);
        markup.push_change(&mut html, replacement, matched);
        last = start + matched.len();
        count += 1;
    }

    if count == 0 {
        return MatchResult::unchanged(value);
    }

    let tail = &value[last..];
    replaced.push_str(tail);
    html.push_str(tail);

    MatchResult {
        count,
        replaced,
        diff: Some(html),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_prefix_occurrence_markup() {
        let result = match_replace("valueA", "value", "replacement", false);
        assert_eq!(result.count, 1);
        assert_eq!(result.replaced, "replacementA");
        assert_eq!(
            result.diff.as_deref(),
            Some("<strong style='color: green;'>replacement</strong><del><em style='color: red;'>value</em></del>A")
        );
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let result = match_replace("value:value", "value", "replacement", false);
        assert_eq!(result.count, 2);
        assert_eq!(result.replaced, "replacement:replacement");
        let expected = format!(
            "{INSERT_OPEN}replacement{INSERT_CLOSE}{DELETE_OPEN}value{DELETE_CLOSE}:\
             {INSERT_OPEN}replacement{INSERT_CLOSE}{DELETE_OPEN}value{DELETE_CLOSE}"
        );
        assert_eq!(result.diff.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let result = match_replace("aaaa", "aa", "b", false);
        assert_eq!(result.count, 2);
        assert_eq!(result.replaced, "bb");

        let odd = match_replace("aaa", "aa", "b", false);
        assert_eq!(odd.count, 1);
        assert_eq!(odd.replaced, "ba");
    }

    #[test]
    fn no_occurrence_is_pass_through() {
        let result = match_replace("nothingToReplace", "value", "replacement", false);
        assert_eq!(result.count, 0);
        assert!(!result.is_match());
        assert_eq!(result.replaced, "nothingToReplace");
        assert_eq!(result.diff, None);
    }

    #[test]
    fn empty_search_never_matches() {
        let result = match_replace("anything", "", "x", false);
        assert_eq!(result.count, 0);
        assert_eq!(result.replaced, "anything");
        assert_eq!(result.diff, None);

        let whole = match_replace("", "", "x", true);
        assert_eq!(whole.count, 0);
        assert_eq!(whole.replaced, "");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let result = match_replace("Value", "value", "replacement", false);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn match_whole_requires_equality() {
        let exact = match_replace("value", "value", "replacement", true);
        assert_eq!(exact.count, 1);
        assert_eq!(exact.replaced, "replacement");
        assert_eq!(
            exact.diff.as_deref(),
            Some("<strong style='color: green;'>replacement</strong><del><em style='color: red;'>value</em></del>")
        );

        for partial in ["another value", "value another", "values"] {
            let result = match_replace(partial, "value", "replacement", true);
            assert_eq!(result.count, 0, "{partial} should not match whole");
            assert_eq!(result.replaced, partial);
        }
    }

    #[test]
    fn replacement_containing_search_does_not_rescan() {
        let result = match_replace("ab", "a", "aa", false);
        assert_eq!(result.count, 1);
        assert_eq!(result.replaced, "aab");
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let result = match_replace("héllo wörld héllo", "héllo", "hi", false);
        assert_eq!(result.count, 2);
        assert_eq!(result.replaced, "hi wörld hi");
        assert!(result.diff.unwrap().contains(" wörld "));
    }

    #[test]
    fn custom_markup_is_used() {
        let markup = DiffMarkup {
            insert_open: "<ins>".into(),
            insert_close: "</ins>".into(),
            delete_open: "<del>".into(),
            delete_close: "</del>".into(),
        };
        let result = match_replace_with("xay", "a", "b", false, &markup);
        assert_eq!(result.diff.as_deref(), Some("x<ins>b</ins><del>a</del>y"));
    }
}
