use super::*;
use crate::state::marketplace::{FilterUpdate, SortOrder};

#[test]
fn mock_ids_are_unique() {
    let service = MarketplaceService::mock();
    let mut ids: Vec<_> = service.all().iter().map(|i| i.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), service.all().len());
}

#[test]
fn categories_are_distinct_in_listing_order() {
    let categories = MarketplaceService::mock().categories();
    assert_eq!(categories.first().map(String::as_str), Some("Research"));
    assert_eq!(categories.iter().filter(|c| c.as_str() == "Data").count(), 1);
}

#[test]
fn list_applies_filters() {
    let service = MarketplaceService::mock();
    let filters = MarketplaceFilters::default()
        .updated(FilterUpdate::Kind(Some(ItemKind::Tool)))
        .updated(FilterUpdate::Sort(SortOrder::TopRated));
    let names: Vec<_> = service.list(&filters).into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Slack Notify", "SQL Query", "PDF Extract"]);
}

#[test]
fn default_listing_is_most_installed_first() {
    let service = MarketplaceService::default();
    let listed = service.list(&MarketplaceFilters::default());
    assert_eq!(listed.len(), service.all().len());
    assert_eq!(listed[0].id, "slack-notify");
}

#[test]
fn find_and_featured() {
    let service = MarketplaceService::mock();
    assert_eq!(service.find("pdf-extract").map(|i| i.kind), Some(ItemKind::Tool));
    assert!(service.find("nope").is_none());
    assert!(service.featured().iter().all(|i| i.featured));
    assert_eq!(service.featured().len(), 3);
}
