//! Progress display for a generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks composed tiles and the current stage of a run
///
/// A hidden tracker accepts every call and draws nothing.
#[derive(Debug, Clone)]
pub struct GenerationProgress {
    bar: Option<ProgressBar>,
}

impl GenerationProgress {
    /// Create a tracker for `total` tiles, drawing only when `visible`
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = visible.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_prefix("tiles");
            bar
        });
        Self { bar }
    }

    /// Create a tracker that draws nothing
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Test whether this tracker draws to the terminal
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one finished tile; safe to call from worker threads
    pub fn tile_done(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Show which stage of the run is in progress
    pub fn stage(&self, message: &'static str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(message);
        }
    }

    /// Number of tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
