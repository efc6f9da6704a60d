/// ProgressReporter port for user-facing status messages
///
/// Messages go somewhere that does not interfere with the report itself
/// (stderr for the CLI).
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Signals that the caller is waiting on something (e.g. search results)
    ///
    /// Stays visible until the next `report_completion` or `report_error`.
    fn report_pending(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
