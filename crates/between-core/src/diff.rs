//! Unified diff preview of a pending rewrite

use similar::TextDiff;

/// Render a unified diff between the current and the rewritten document.
///
/// Returns an empty string when the two are identical.
pub fn unified_diff(label: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}
