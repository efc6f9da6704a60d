use super::{describe_platforms, describe_price_range, format_price};
use crate::application::read_models::{AssessmentView, ListingsView, SearchState};
use crate::performance::domain::ScoreBand;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TextFormatter adapter for terminal output
///
/// Colour is decided by the caller; piped output should be built with
/// `color: false` so no escape codes leak into files.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, score: u8, band: ScoreBand) -> String {
        let text = format!("{}/100", score);
        if !self.color {
            return text;
        }
        match band {
            ScoreBand::Excellent => text.green().bold().to_string(),
            ScoreBand::Good => text.cyan().bold().to_string(),
            ScoreBand::Fair => text.yellow().bold().to_string(),
            ScoreBand::Limited => text.red().bold().to_string(),
        }
    }

    fn section_title(&self, title: &str) -> String {
        let icon = match title {
            "Can Handle" => "✅",
            "Might Struggle" => "⚠️ ",
            "Not Recommended" => "❌",
            _ => "🔧",
        };
        format!("{} {}", icon, self.heading(title))
    }

    fn price(&self, amount: u32) -> String {
        let text = format_price(amount);
        if self.color {
            text.green().bold().to_string()
        } else {
            text
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_assessment(&self, view: &AssessmentView) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.heading("PC Performance Analysis"));
        output.push_str("\n\n");
        output.push_str(&format!("  Profile: {}\n", view.profile));
        output.push_str(&format!(
            "  Score:   {}  {}\n",
            self.score(view.score, view.band),
            view.headline
        ));
        output.push_str(&format!("  Tier:    {} configuration\n", view.tier));

        for (title, items) in view.sections() {
            output.push('\n');
            output.push_str(&self.section_title(title));
            output.push('\n');
            for item in items {
                output.push_str(&format!("  • {}\n", item));
            }
        }

        Ok(output)
    }

    fn format_listings(&self, view: &ListingsView) -> Result<String> {
        let mut output = String::new();

        match view.state {
            SearchState::EmptyQuery => {
                output.push_str("🔍 Start typing to compare prices across platforms\n");
                return Ok(output);
            }
            SearchState::NoResults => {
                output.push_str(&format!(
                    "No products match your filters for \"{}\" ({} listings hidden)\n",
                    view.query.trim(),
                    view.generated
                ));
                output.push_str(&self.dim(&format!(
                    "Platforms: {} | Price: {}\n",
                    describe_platforms(&view.criteria),
                    describe_price_range(&view.criteria)
                )));
                return Ok(output);
            }
            SearchState::Results => {}
        }

        output.push_str(&self.heading(&format!(
            "Price comparison for \"{}\" ({} of {} listings)",
            view.query.trim(),
            view.listings.len(),
            view.generated
        )));
        output.push('\n');
        output.push_str(&self.dim(&format!(
            "Platforms: {} | Price: {} | Sort: {}",
            describe_platforms(&view.criteria),
            describe_price_range(&view.criteria),
            view.criteria.sort
        )));
        output.push_str("\n\n");

        let name_width = view
            .listings
            .iter()
            .map(|l| l.name.chars().count())
            .max()
            .unwrap_or(0);

        for listing in &view.listings {
            let name_pad = name_width - listing.name.chars().count();
            output.push_str(&format!(
                "  {:<9} {}{}  {:>8}  {}  -{:>2}%  save {:<7}  ★ {}\n",
                listing.platform.name(),
                listing.name,
                " ".repeat(name_pad),
                self.price(listing.price),
                self.dim(&format!("{:>8}", format_price(listing.original_price))),
                listing.discount_percent,
                format_price(listing.savings()),
                listing.rating
            ));
            output.push_str(&format!("  {:<9} {}\n", "", self.dim(&listing.url)));
        }

        if let Some(best) = view.best_price() {
            output.push_str(&format!(
                "\nBest price: {} on {} ({})\n",
                self.price(best.price),
                best.platform.name(),
                best.name
            ));
        }

        Ok(output)
    }
}
