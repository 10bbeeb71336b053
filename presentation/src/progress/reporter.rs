//! Spinner shown until the first reply fragment arrives

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Transient spinner; it is cleared, not left in the scrollback.
pub struct WaitingIndicator {
    bar: ProgressBar,
}

impl WaitingIndicator {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// An indicator that draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Drop for WaitingIndicator {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_is_idempotent() {
        let indicator = WaitingIndicator::hidden();
        assert!(!indicator.is_finished());
        indicator.finish();
        indicator.finish();
        assert!(indicator.is_finished());
    }
}
