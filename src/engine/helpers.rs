/// Trim and fold case. Every name, direction and answer comparison goes through here.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case-insensitive, whitespace-trimmed equality.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
