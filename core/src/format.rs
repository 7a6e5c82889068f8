//! Display helpers.

/// Shorten long identifiers for tables: ids of 12 characters or fewer are
/// returned as-is, longer ones keep `begin` leading and `end` trailing
/// characters around `...`.
pub fn format_id(id: &str, begin: usize, end: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 12 {
        return id.to_string();
    }
    let head: String = chars.iter().take(begin).collect();
    let tail: String = chars[chars.len().saturating_sub(end)..].iter().collect();
    format!("{head}...{tail}")
}
