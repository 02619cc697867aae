//! Search, category, kind, and sort controls for the marketplace.
//!
//! DESIGN
//! ======
//! The search box is debounced locally and committed as a single
//! `FilterUpdate::Query`; select boxes commit immediately.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::{use_default_debounce, use_marketplace_filters};
use crate::providers::provider_error;
use crate::services::marketplace::MarketplaceService;
use crate::state::marketplace::{FilterUpdate, ItemKind, SortOrder};

fn parse_kind(value: &str) -> Option<ItemKind> {
    match value {
        "agent" => Some(ItemKind::Agent),
        "template" => Some(ItemKind::Template),
        "tool" => Some(ItemKind::Tool),
        _ => None,
    }
}

fn parse_sort(value: &str) -> SortOrder {
    match value {
        "top_rated" => SortOrder::TopRated,
        "name" => SortOrder::Name,
        _ => SortOrder::Popular,
    }
}

#[component]
pub fn MarketplaceFilterBar() -> impl IntoView {
    let filters = match use_marketplace_filters() {
        Ok(filters) => filters,
        Err(err) => return provider_error(&err),
    };
    let categories = use_context::<MarketplaceService>().unwrap_or_default().categories();

    let query = RwSignal::new(filters.filters_untracked().query);
    let debounced = match use_default_debounce::<String>(query.into()) {
        Ok(debounced) => debounced,
        Err(err) => return provider_error(&err),
    };
    Effect::new(move |_| {
        let next = debounced.get();
        if next != filters.filters_untracked().query {
            filters.update_filter(FilterUpdate::Query(next));
        }
    });

    let on_clear = move |_| {
        query.set(String::new());
        filters.clear_filters();
    };

    view! {
        <div class="marketplace-filter-bar">
            <input
                type="search"
                placeholder="Search the marketplace"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select on:change=move |ev| filters.update_filter(FilterUpdate::Category(Some(event_target_value(&ev))))>
                <option value="">"All categories"</option>
                {categories
                    .into_iter()
                    .map(|category| {
                        let selected = category.clone();
                        let value = category.clone();
                        view! {
                            <option
                                value=value
                                selected=move || filters.filters().category.as_deref() == Some(selected.as_str())
                            >
                                {category}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select on:change=move |ev| filters.update_filter(FilterUpdate::Kind(parse_kind(&event_target_value(&ev))))>
                <option value="">"Any kind"</option>
                <option value="agent">"Agents"</option>
                <option value="template">"Templates"</option>
                <option value="tool">"Tools"</option>
            </select>
            <select on:change=move |ev| filters.update_filter(FilterUpdate::Sort(parse_sort(&event_target_value(&ev))))>
                <option value="popular">"Most installed"</option>
                <option value="top_rated">"Top rated"</option>
                <option value="name">"Name"</option>
            </select>
            <Show when=move || !filters.filters().is_default()>
                <button class="btn marketplace-filter-bar__clear" on:click=on_clear>"Clear"</button>
            </Show>
        </div>
    }
    .into_any()
}
