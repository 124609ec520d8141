//! Small utility helpers used across modules.

use regex::{NoExpand, RegexBuilder};

/// Replace every case-insensitive occurrence of `needle` in `text` by `marker`.
/// An empty needle leaves the text untouched.
pub fn redact_ci(text: &str, needle: &str, marker: &str) -> String {
  if needle.is_empty() {
    return text.to_string();
  }
  match RegexBuilder::new(&regex::escape(needle)).case_insensitive(true).build() {
    Ok(re) => re.replace_all(text, NoExpand(marker)).into_owned(),
    Err(_) => text.replace(needle, marker),
  }
}

/// Truncate on a char boundary to at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
  s.chars().take(max).collect()
}

/// Log-safe truncation for large strings.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    format!("{}… ({} chars total)", truncate_chars(s, max), s.chars().count())
  }
}
