use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port with an indicatif
/// progress bar for the per-project phases. Plain messages go through the
/// logger with the bar suspended, so log lines and the bar do not interleave.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Returns the active bar, replacing it when a fan-out of another size starts
    fn bar_for(&self, total: usize) -> Option<ProgressBar> {
        let mut guard = self.progress_bar.lock().ok()?;
        match guard.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) && !pb.is_finished() => Some(pb.clone()),
            _ => {
                if let Some(previous) = guard.take() {
                    previous.finish_and_clear();
                }
                let pb = ProgressBar::new(total as u64);
                pb.set_style(Self::style());
                *guard = Some(pb.clone());
                Some(pb)
            }
        }
    }

    fn with_bar_suspended(&self, f: impl FnOnce()) {
        let active = self
            .progress_bar
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned());
        match active {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.progress_bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.with_bar_suspended(|| log::info!("{}", message));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let Some(pb) = self.bar_for(total) else {
            return;
        };
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish();
        }
    }

    fn report_error(&self, message: &str) {
        self.with_bar_suspended(|| log::warn!("{}", message));
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        log::info!("{}", message);
    }
}
