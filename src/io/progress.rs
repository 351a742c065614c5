//! Progress display for batches of input files and their shapes

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for batch operations
///
/// Each file gets a bar counting decomposed shapes. Bars are recycled once
/// more than [`MAX_INDIVIDUAL_PROGRESS_BARS`] files have started, and a batch
/// bar counting finished files is added for large batches.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SHAPE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} shapes"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(SHAPE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of files the manager was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        let slots = self.file_bars.len();
        if slots == 0 {
            return None;
        }
        self.file_bars.get(index % slots)
    }

    /// Configure the file's bar for its shape count
    pub fn start_file(&self, index: usize, path: &Path, shape_count: usize) {
        if let Some(bar) = self.bar_for(index) {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.reset();
            bar.set_length(shape_count as u64);
            bar.set_message(display_name);
        }
    }

    /// Record one finished shape
    ///
    /// Takes `&self` so shapes decomposed in parallel can report directly.
    pub fn shape_finished(&self, index: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.inc(1);
        }
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(bar) = self.bar_for(index) {
            let name = bar.message();
            bar.set_message(format!("✓ {name} ({:.1}s)", elapsed.as_secs_f64()));
            bar.set_position(bar.length().unwrap_or(0));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        for bar in &self.file_bars {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
