/// Collapses every whitespace run (spaces, tabs, newlines) into a single space
/// and trims both ends.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
