use super::{describe_platforms, describe_price_range, format_price};
use crate::application::read_models::{AssessmentView, ListingsView, ReportMetadata, SearchState};
use crate::catalog::domain::ProductListing;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for listing information
const TABLE_HEADER: &str = "| Platform | Product | Price | Original | Discount | Rating |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----------|---------|-------|----------|----------|--------|\n";

/// MarkdownFormatter adapter for shareable Markdown reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Escapes characters that would break out of link text
    fn escape_link_text(text: &str) -> String {
        Self::escape_markdown_table_cell(text)
            .replace('[', "\\[")
            .replace(']', "\\]")
    }

    fn listing_link(listing: &ProductListing) -> String {
        format!(
            "[{}]({})",
            Self::escape_link_text(&listing.name),
            listing.url
        )
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_footer(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str(&format!(
            "---\n\n_Generated by {} {} at {}_\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp
        ));
    }

    fn render_listing_table(&self, output: &mut String, listings: &[ProductListing]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for listing in listings {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {}% | {} |\n",
                listing.platform.name(),
                Self::listing_link(listing),
                format_price(listing.price),
                format_price(listing.original_price),
                listing.discount_percent,
                listing.rating
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_assessment(&self, view: &AssessmentView) -> Result<String> {
        let mut output = String::new();
        output.push_str("# PC Performance Report\n\n");
        output.push_str(&format!("- **Profile**: {}\n", view.profile));
        output.push_str(&format!("- **Score**: {}/100\n", view.score));
        output.push_str(&format!("- **Tier**: {} configuration\n\n", view.tier));
        output.push_str(&format!("> {}\n\n", view.headline));

        for (title, items) in view.sections() {
            output.push_str(&format!("## {}\n\n", title));
            for item in items {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        self.render_footer(&mut output, &view.metadata);
        Ok(output)
    }

    fn format_listings(&self, view: &ListingsView) -> Result<String> {
        let mut output = String::new();

        match view.state {
            SearchState::EmptyQuery => {
                output.push_str("# Price Comparison\n\n");
                output.push_str("No search query was given.\n\n");
            }
            SearchState::NoResults => {
                output.push_str(&format!("# Price Comparison: {}\n\n", view.query.trim()));
                output.push_str(&format!(
                    "None of the {} generated listings match the current filters.\n\n",
                    view.generated
                ));
            }
            SearchState::Results => {
                output.push_str(&format!("# Price Comparison: {}\n\n", view.query.trim()));
                output.push_str(&format!(
                    "Showing {} of {} listings. Platforms: {}. Price: {}. Sort: {}.\n\n",
                    view.listings.len(),
                    view.generated,
                    describe_platforms(&view.criteria),
                    describe_price_range(&view.criteria),
                    view.criteria.sort
                ));
                self.render_listing_table(&mut output, &view.listings);

                if let Some(best) = view.best_price() {
                    output.push_str(&format!(
                        "**Best price**: {} on {}\n\n",
                        format_price(best.price),
                        best.platform.name()
                    ));
                }
            }
        }

        self.render_footer(&mut output, &view.metadata);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{FilterCriteria, Platform, ProductVariant, Rating};
    use crate::performance::domain::{CpuTier, HardwareProfile, StorageKind, Usage};
    use crate::performance::services::ScoreEngine;

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "rigcheck".to_string(),
            "0.1.0".to_string(),
        )
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_assessment_sections() {
        let profile = HardwareProfile::new(4, CpuTier::Low, StorageKind::Hdd, Usage::Gaming);
        let view = AssessmentView::build(profile, ScoreEngine::evaluate(&profile), metadata());
        let output = MarkdownFormatter::new().format_assessment(&view).unwrap();

        assert!(output.starts_with("# PC Performance Report\n"));
        assert!(output.contains("- **Tier**: low-end configuration"));
        assert!(output.contains("## Can Handle\n"));
        assert!(output.contains("## Might Struggle\n"));
        assert!(output.contains("## Not Recommended\n"));
        assert!(output.contains("## Suggested Upgrades\n"));
        assert!(output.contains("- Upgrade to SSD - this is the #1 best upgrade for instant speed boost"));
        assert!(output.ends_with("_Generated by rigcheck 0.1.0 at 2024-01-01T00:00:00Z_\n"));
    }

    #[test]
    fn test_listings_table_links_and_escapes() {
        let listing = ProductListing::new(
            "usb | hub [v2]",
            Platform::Ajio,
            ProductVariant::Compact,
            10,
            Rating::from_tenths(44),
        );
        let url = listing.url.clone();
        let view = ListingsView::build(
            "usb | hub [v2]".to_string(),
            FilterCriteria::new(),
            1,
            vec![listing],
            metadata(),
        );
        let output = MarkdownFormatter::new().format_listings(&view).unwrap();

        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains(&format!("[usb \\| hub \\[v2\\] Compact]({})", url)));
        assert!(output.contains("| Ajio | "));
        assert!(output.contains("| ₹1,349 | ₹1,499 | 10% | 4.4 |"));
        assert!(output.contains("**Best price**: ₹1,349 on Ajio"));
    }

    #[test]
    fn test_listings_no_results() {
        let view = ListingsView::build(
            "lamp".to_string(),
            FilterCriteria::new().with_price_range(Some(100000.0), None),
            30,
            vec![],
            metadata(),
        );
        let output = MarkdownFormatter::new().format_listings(&view).unwrap();
        assert!(output.starts_with("# Price Comparison: lamp\n"));
        assert!(output.contains("None of the 30 generated listings"));
        assert!(!output.contains(TABLE_HEADER));
    }
}
