/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach randomness, the console and output destinations.
pub mod output_presenter;
pub mod progress_reporter;
pub mod random_source;
pub mod report_formatter;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use random_source::RandomSource;
pub use report_formatter::ReportFormatter;
