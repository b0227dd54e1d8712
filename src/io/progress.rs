//! Terminal progress over the requested densities

use crate::generation::GenerationObserver;
use crate::io::configuration::PROGRESS_TEMPLATE;
use crate::io::error::DrawableError;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static DENSITY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar ticking once per density
pub struct ProgressManager {
    bar: ProgressBar,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(DENSITY_STYLE.clone());
        Self { bar, failed: 0 }
    }

    /// Set the number of densities about to be generated
    pub fn initialize(&mut self, density_count: usize) {
        self.failed = 0;
        self.bar.set_length(density_count as u64);
        self.bar.set_position(0);
    }

    /// Number of densities reported as failed so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl GenerationObserver for ProgressManager {
    fn density_started(&mut self, identifier: &str) {
        self.bar.set_prefix(identifier.to_string());
        self.bar.set_message("resampling");
    }

    fn density_finished(&mut self, identifier: &str, error: Option<&DrawableError>) {
        if error.is_some() {
            self.failed += 1;
            self.bar.set_message(format!("✗ {identifier}"));
        } else {
            self.bar.set_message(format!("✓ {identifier}"));
        }
        self.bar.inc(1);
    }
}
