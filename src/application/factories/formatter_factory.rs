use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Encapsulates the choice of formatter adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `color` only affects [`OutputFormat::Text`].
    ///
    /// # Examples
    /// ```
    /// use rigcheck::application::dto::OutputFormat;
    /// use rigcheck::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(color)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use rigcheck::application::dto::OutputFormat;
    /// use rigcheck::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering report...",
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ListingsView, ReportMetadata};
    use crate::catalog::domain::FilterCriteria;

    fn empty_view() -> ListingsView {
        ListingsView::build(
            String::new(),
            FilterCriteria::new(),
            0,
            vec![],
            ReportMetadata::now(),
        )
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json, false);
        let output = formatter.format_listings(&empty_view()).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_create_markdown_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Markdown, false);
        let output = formatter.format_listings(&empty_view()).unwrap();
        assert!(output.starts_with("# "));
    }

    #[test]
    fn test_create_text_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Text, false);
        let output = formatter.format_listings(&empty_view()).unwrap();
        assert!(output.contains("Start typing"));
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON output..."
        );
    }

    #[test]
    fn test_progress_message_markdown() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown output..."
        );
    }
}
