//! Fixed-width label wrapping for graph node display.

/// Default maximum line width for node labels.
pub const DEFAULT_WRAP_WIDTH: usize = 28;

/// Break `text` into lines of at most `width` characters.
///
/// Breaks land after the last space that fits on the line when there is one,
/// otherwise the token is split at the width limit. Breaks are pure
/// insertions: concatenating the returned lines reproduces `text` exactly.
///
/// # Example
///
/// ```
/// use trellis::label::wrap_label;
///
/// assert_eq!(wrap_label("short", 28), vec!["short"]);
/// assert_eq!(
///     wrap_label("a_very_long_unbroken_name.txt", 10),
///     vec!["a_very_lon", "g_unbroken", "_name.txt"],
/// );
/// ```
pub fn wrap_label(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        // Byte offset just past the first `width` chars, if that many exist.
        let Some((hard, _)) = rest.char_indices().nth(width) else {
            lines.push(rest.to_string());
            break;
        };
        let window = &rest[..hard];
        let brk = window
            .char_indices()
            .rev()
            .find(|&(_, c)| c == ' ')
            .map(|(i, _)| i + 1)
            .unwrap_or(hard);
        lines.push(rest[..brk].to_string());
        rest = &rest[brk..];
    }
    lines
}
