//! Marketplace browser.

use leptos::prelude::*;

use crate::components::marketplace_filter_bar::MarketplaceFilterBar;
use crate::components::marketplace_grid::MarketplaceGrid;
use crate::layouts::MarketplaceLayout;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    view! {
        <MarketplaceLayout>
            <div class="page page--marketplace">
                <MarketplaceFilterBar/>
                <MarketplaceGrid/>
            </div>
        </MarketplaceLayout>
    }
}
