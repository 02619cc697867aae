//! Marketplace listing and filter state.
//!
//! DESIGN
//! ======
//! Filters are a plain value updated through [`FilterUpdate`] so a single
//! functional update covers every control in the filter bar. Applying the
//! filters is pure and returns borrowed items in display order.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Agent,
    Template,
    Tool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceItem {
    pub id: String,
    pub name: String,
    pub author: String,
    pub kind: ItemKind,
    pub category: String,
    pub description: String,
    pub rating: f32,
    pub installs: u32,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Popular,
    TopRated,
    Name,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceFilters {
    pub query: String,
    pub category: Option<String>,
    pub kind: Option<ItemKind>,
    pub min_rating: Option<f32>,
    pub sort: SortOrder,
}

/// One change from the filter bar.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterUpdate {
    Query(String),
    Category(Option<String>),
    Kind(Option<ItemKind>),
    MinRating(Option<f32>),
    Sort(SortOrder),
}

impl MarketplaceFilters {
    #[must_use]
    pub fn updated(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Query(query) => next.query = query,
            FilterUpdate::Category(category) => {
                next.category = category.filter(|c| !c.trim().is_empty());
            }
            FilterUpdate::Kind(kind) => next.kind = kind,
            FilterUpdate::MinRating(rating) => {
                next.min_rating = rating.filter(|r| r.is_finite()).map(|r| r.clamp(0.0, 5.0));
            }
            FilterUpdate::Sort(sort) => next.sort = sort,
        }
        next
    }

    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn matches(&self, item: &MarketplaceItem) -> bool {
        let needle = self.query.trim().to_lowercase();
        let query_ok = needle.is_empty()
            || item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
            || item.author.to_lowercase().contains(&needle);
        let category_ok = self.category.as_ref().is_none_or(|c| item.category.eq_ignore_ascii_case(c));
        let kind_ok = self.kind.is_none_or(|k| item.kind == k);
        let rating_ok = self.min_rating.is_none_or(|r| item.rating >= r);
        query_ok && category_ok && kind_ok && rating_ok
    }

    /// Items that pass every filter, sorted by the selected order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [MarketplaceItem]) -> Vec<&'a MarketplaceItem> {
        let mut out: Vec<_> = items.iter().filter(|item| self.matches(item)).collect();
        match self.sort {
            SortOrder::Popular => out.sort_by(|a, b| b.installs.cmp(&a.installs).then_with(|| a.name.cmp(&b.name))),
            SortOrder::TopRated => {
                out.sort_by(|a, b| b.rating.total_cmp(&a.rating).then_with(|| a.name.cmp(&b.name)));
            }
            SortOrder::Name => out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        }
        out
    }
}
