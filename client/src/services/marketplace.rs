//! Marketplace catalogue served from built-in data.
//!
//! There is no marketplace backend yet; this service returns a fixed listing
//! so the grid, filters, and featured shelf can be built against real shapes.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use crate::state::marketplace::{ItemKind, MarketplaceFilters, MarketplaceItem};

#[derive(Clone, Debug, PartialEq)]
pub struct MarketplaceService {
    items: Vec<MarketplaceItem>,
}

impl Default for MarketplaceService {
    fn default() -> Self {
        Self::mock()
    }
}

impl MarketplaceService {
    #[must_use]
    pub fn new(items: Vec<MarketplaceItem>) -> Self {
        Self { items }
    }

    /// The built-in listing.
    #[must_use]
    pub fn mock() -> Self {
        let item = |id: &str, name: &str, author: &str, kind: ItemKind, category: &str, description: &str, rating: f32, installs: u32, featured: bool| {
            MarketplaceItem {
                id: id.to_owned(),
                name: name.to_owned(),
                author: author.to_owned(),
                kind,
                category: category.to_owned(),
                description: description.to_owned(),
                rating,
                installs,
                featured,
            }
        };
        Self::new(vec![
            item("web-researcher", "Web Researcher", "agentflow", ItemKind::Agent, "Research", "Searches the web and cites sources", 4.7, 12_400, true),
            item("code-reviewer", "Code Reviewer", "devtools", ItemKind::Agent, "Engineering", "Reviews pull requests for bugs and style", 4.5, 8_900, true),
            item("support-bot", "Support Bot", "helpdesk", ItemKind::Agent, "Support", "Answers customer questions from your docs", 4.2, 6_100, false),
            item("lead-qualifier", "Lead Qualifier", "salesops", ItemKind::Template, "Sales", "Scores inbound leads and routes hot ones", 4.0, 3_300, false),
            item("weekly-report", "Weekly Report", "agentflow", ItemKind::Template, "Productivity", "Compiles a weekly summary from your tools", 4.4, 5_700, true),
            item("slack-notify", "Slack Notify", "integrations", ItemKind::Tool, "Integrations", "Posts messages to a Slack channel", 4.6, 15_200, false),
            item("pdf-extract", "PDF Extract", "docutools", ItemKind::Tool, "Data", "Pulls text and tables out of PDFs", 3.8, 4_200, false),
            item("sql-query", "SQL Query", "datakit", ItemKind::Tool, "Data", "Runs read-only queries against a database", 4.3, 7_800, false),
        ])
    }

    #[must_use]
    pub fn all(&self) -> &[MarketplaceItem] {
        &self.items
    }

    /// Items passing `filters`, in the filters' sort order.
    #[must_use]
    pub fn list(&self, filters: &MarketplaceFilters) -> Vec<MarketplaceItem> {
        filters.apply(&self.items).into_iter().cloned().collect()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.category) {
                out.push(item.category.clone());
            }
        }
        out
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MarketplaceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn featured(&self) -> Vec<&MarketplaceItem> {
        self.items.iter().filter(|item| item.featured).collect()
    }
}
