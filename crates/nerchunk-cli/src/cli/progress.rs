//! Progress bar for chunked annotation runs.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar driven by the pipeline's `(completed, total)` callback.
pub struct ChunkProgress {
    bar: ProgressBar,
}

impl ChunkProgress {
    /// A visible bar, or a hidden one when `enabled` is false.
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Annotating [{bar:30.cyan/blue}] {pos}/{len} chunks {wide_msg}")
        {
            bar.set_style(style.progress_chars("█▓░"));
        }
        Self { bar }
    }

    /// Record `completed` of `total` chunks.
    pub fn update(&self, completed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(completed as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tracks_callback_values() {
        let progress = ChunkProgress::new(false);
        progress.update(0, 4);
        progress.update(3, 4);
        assert_eq!(progress.bar.position(), 3);
        assert_eq!(progress.bar.length(), Some(4));
    }
}
