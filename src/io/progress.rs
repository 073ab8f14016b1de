//! Terminal spinner shown while a screenshot is analyzed

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner tied to a single analysis
pub struct AnalysisSpinner {
    bar: ProgressBar,
}

impl AnalysisSpinner {
    /// Start spinning with the file name of `path` as message
    pub fn start(path: &Path) -> Self {
        let display_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().to_string());

        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(format!("Analyzing {display_name}"));
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));

        Self { bar }
    }

    /// Message currently displayed
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Remove the spinner after a successful analysis
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Leave the spinner with a failure note
    pub fn fail(&self) {
        self.bar.abandon_with_message("Analysis failed");
    }
}
