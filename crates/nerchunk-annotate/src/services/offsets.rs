//! Byte to character offset conversion for one piece of text.

/// Char-boundary table for a string. Regex matches report byte offsets while
/// entities carry character offsets, so every backend converts through this.
pub struct CharOffsets {
    /// Byte offset of every character, followed by the text's byte length.
    boundaries: Vec<usize>,
}

impl CharOffsets {
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Number of characters in the text.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Character offset of a byte offset on a char boundary.
    pub fn to_char(&self, byte: usize) -> usize {
        match self.boundaries.binary_search(&byte) {
            Ok(i) | Err(i) => i,
        }
    }
}
