use core::fmt::{Debug, Formatter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{prefix:>12.bold.cyan} [{bar:25}] {pos}/{len} rows";
const TEMPLATE_NO_COLOR: &str = "{prefix:>12} [{bar:25}] {pos}/{len} rows";

/// Refresh rate for progress updates.
const REFRESH_HZ: u8 = 10;

/// A progress bar over the rows of the table, drawn on stderr.
pub struct ProgressReporter {
    bar: ProgressBar,
    use_colors: bool,
}

impl ProgressReporter {
    /// Create a progress reporter for `total` rows.
    ///
    /// When `visible` is false nothing is drawn. When `use_colors` is false, progress bar chrome is rendered
    /// without ANSI styling.
    #[must_use]
    pub fn new(total: u64, visible: bool, use_colors: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr_with_hz(REFRESH_HZ)
        } else {
            ProgressDrawTarget::hidden()
        };

        let bar = ProgressBar::with_draw_target(Some(total), target);
        let template = if use_colors { TEMPLATE } else { TEMPLATE_NO_COLOR };
        let style = ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        bar.set_prefix("Analyzing");

        Self { bar, use_colors }
    }

    /// Record that `rows` rows have been completed.
    pub fn set_position(&self, rows: usize) {
        self.bar.set_position(rows as u64);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the progress indicator.
    pub fn done(&self) {
        self.bar.finish_and_clear();
    }

    #[must_use]
    pub const fn use_colors(&self) -> bool {
        self.use_colors
    }
}

impl Debug for ProgressReporter {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("bar", &self.bar)
            .field("use_colors", &self.use_colors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_tracks_position() {
        let reporter = ProgressReporter::new(3, false, false);
        reporter.set_position(2);
        assert_eq!(reporter.position(), 2);
        assert!(!reporter.use_colors());
        reporter.done();
    }
}
