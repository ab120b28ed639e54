/// ProgressReporter port for reporting progress during an export
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so the user can follow long-running per-project fan-outs.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress of a fan-out
    ///
    /// # Arguments
    /// * `current` - Number of finished items
    /// * `total` - Number of items in the fan-out
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
