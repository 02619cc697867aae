//! Filtered marketplace listing.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::skeleton::{Skeleton, use_hydrated};
use crate::hooks::use_marketplace_filters;
use crate::providers::provider_error;
use crate::services::marketplace::MarketplaceService;
use crate::state::marketplace::{ItemKind, MarketplaceItem};

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Agent => "Agent",
        ItemKind::Template => "Template",
        ItemKind::Tool => "Tool",
    }
}

#[component]
fn MarketplaceCard(item: MarketplaceItem) -> impl IntoView {
    view! {
        <article class="marketplace-card" class:marketplace-card--featured=item.featured>
            <header>
                <h3>{item.name}</h3>
                <span class="marketplace-card__kind">{kind_label(item.kind)}</span>
            </header>
            <p>{item.description}</p>
            <footer>
                <span class="marketplace-card__author">{item.author}</span>
                <span class="marketplace-card__rating">{format!("★ {:.1}", item.rating)}</span>
                <span class="marketplace-card__installs">{format!("{} installs", item.installs)}</span>
            </footer>
        </article>
    }
}

#[component]
pub fn MarketplaceGrid() -> impl IntoView {
    let filters = match use_marketplace_filters() {
        Ok(filters) => filters,
        Err(err) => return provider_error(&err),
    };
    let service = use_context::<MarketplaceService>().unwrap_or_default();
    let hydrated = use_hydrated();

    view! {
        <Show when=move || hydrated.get() fallback=|| view! { <Skeleton count=6 class="marketplace-grid__skeleton"/> }>
            {
                let service = service.clone();
                move || {
                    let items = service.list(&filters.filters());
                    if items.is_empty() {
                        view! { <p class="marketplace-grid__empty">"No items match these filters."</p> }.into_any()
                    } else {
                        view! {
                            <div class="marketplace-grid">
                                {items.into_iter().map(|item| view! { <MarketplaceCard item/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }
        </Show>
    }
    .into_any()
}
