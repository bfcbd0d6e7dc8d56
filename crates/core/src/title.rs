use regex::Regex;
use std::sync::LazyLock;

/// Display title and release year derived from a raw library title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTitle {
    pub title: String,
    pub year: Option<u16>,
}

// "Title (1999)" with optional trailing whitespace
static RE_YEAR_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{4})\)\s*$").unwrap());

// "1999 Title"
static RE_YEAR_LEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})\s+").unwrap());

/// Derive the display title and year for a library entry.
///
/// The explicit `year` field wins when present; otherwise a 4-digit year is
/// extracted from a trailing parenthesized group or a leading year prefix.
/// Either pattern is stripped from the display title regardless of whether
/// the explicit year was set. No pattern match means no derived year and an
/// unchanged title.
pub fn derive(raw_title: &str, explicit_year: Option<u16>) -> DerivedTitle {
    // A leading year starts at position 0, so it wins over a trailing
    // parenthesized one when a title carries both.
    let embedded = RE_YEAR_LEADING
        .captures(raw_title)
        .or_else(|| RE_YEAR_PAREN.captures(raw_title))
        .and_then(|caps| caps[1].parse::<u16>().ok());

    let stripped = RE_YEAR_PAREN.replace(raw_title, "");
    let stripped = RE_YEAR_LEADING.replace(&stripped, "");
    let stripped = stripped.trim();

    let title = if stripped.is_empty() {
        raw_title.to_string()
    } else {
        stripped.to_string()
    };

    DerivedTitle {
        title,
        year: explicit_year.or(embedded),
    }
}
