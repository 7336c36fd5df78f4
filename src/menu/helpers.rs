//! Menu Transform Helpers
//!
//! Small pure functions shared by the row parser and the transform.

/// Display titles for the well-known category keys.
const CATEGORY_TITLES: [(&str, &str); 6] = [
    ("classics", "Класични Пици"),
    ("veggie", "Вегетаријански Пици"),
    ("gourmet", "Гурмански Пици"),
    ("premium", "Премиум Пици"),
    ("others", "Пастрмалија"),
    ("pizza_slices", "Пица на парче"),
];

/// Looks up the static display title for a category key.
pub fn lookup_category_title(key: &str) -> Option<&'static str> {
    CATEGORY_TITLES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, title)| *title)
}

/// Resolves a category title: explicit column value, then the static table,
/// then the raw key.
pub fn resolve_category_title(explicit: Option<&str>, key: &str) -> String {
    match explicit.filter(|t| !t.is_empty()) {
        Some(title) => title.to_string(),
        None => lookup_category_title(key).unwrap_or(key).to_string(),
    }
}

/// Trims a raw field and removes one leading and one trailing double quote.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Parses the leading integer of `value`, ignoring anything after the digits.
///
/// Leading whitespace and a single sign are accepted; `"450den"` yields 450 and
/// `"12.5"` yields 12. Returns `None` when no digit follows.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a price tier; zero, negative and non-numeric values count as absent.
pub fn parse_price(value: Option<&str>) -> Option<u64> {
    value
        .and_then(parse_int_prefix)
        .filter(|p| *p > 0)
        .and_then(|p| u64::try_from(p).ok())
}

/// Returns `true` when `value` is present and non-empty.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
