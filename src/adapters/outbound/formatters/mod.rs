/// Formatter adapters for the supported output formats
mod json_formatter;
mod markdown_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use text_formatter::TextFormatter;

use crate::catalog::domain::FilterCriteria;

/// Formats whole currency units with a rupee sign and thousands separators
pub(crate) fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}

pub(crate) fn describe_platforms(criteria: &FilterCriteria) -> String {
    if criteria.selected_platforms.is_empty() {
        "all".to_string()
    } else {
        criteria
            .selected_platforms
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub(crate) fn describe_price_range(criteria: &FilterCriteria) -> String {
    match (criteria.price_floor(), criteria.price_ceiling()) {
        (None, None) => "any".to_string(),
        (Some(min), None) => format!("from {}", min),
        (None, Some(max)) => format!("up to {}", max),
        (Some(min), Some(max)) => format!("{} - {}", min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::Platform;

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(0), "₹0");
        assert_eq!(format_price(999), "₹999");
        assert_eq!(format_price(1799), "₹1,799");
        assert_eq!(format_price(1234567), "₹1,234,567");
    }

    #[test]
    fn test_describe_platforms() {
        assert_eq!(describe_platforms(&FilterCriteria::new()), "all");
        let criteria = FilterCriteria::new().with_platforms([Platform::Myntra, Platform::Amazon]);
        assert_eq!(describe_platforms(&criteria), "Amazon, Myntra");
    }

    #[test]
    fn test_describe_price_range() {
        assert_eq!(describe_price_range(&FilterCriteria::new()), "any");
        let criteria = FilterCriteria::new().with_price_range(Some(500.0), Some(1500.5));
        assert_eq!(describe_price_range(&criteria), "500 - 1500.5");
        let criteria = FilterCriteria::new().with_price_range(None, Some(900.0));
        assert_eq!(describe_price_range(&criteria), "up to 900");
    }
}
