/// Normalize a client-supplied lobby code.
///
/// Codes are stored uppercase, so lookups are case-insensitive. An empty code
/// counts as missing.
pub fn normalize_code(raw: Option<&str>) -> Option<String> {
    raw.map(str::to_uppercase).filter(|code| !code.is_empty())
}

/// Treat an empty identifier the same as an absent one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
