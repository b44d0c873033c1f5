//! Input normalization shared by the services

/// Trim surrounding whitespace
pub(crate) fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Trim, mapping blank input to `None`
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim every line and drop the blank ones, keeping order
pub(crate) fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
