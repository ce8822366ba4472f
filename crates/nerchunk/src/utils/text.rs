//! Character-count helpers. All sizes in this crate are code points, not bytes.

/// Number of characters (code points) in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` into consecutive windows of exactly `window` characters.
/// The last window may be shorter. `window` must be non-zero.
pub fn char_windows(text: &str, window: usize) -> Vec<&str> {
    debug_assert!(window > 0);
    let mut windows = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == window {
            windows.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        windows.push(&text[start..]);
    }

    windows
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    if char_len(&flat) <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
