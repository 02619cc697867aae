//! Searchable list of node definitions grouped by category.
//!
//! DESIGN
//! ======
//! The search box writes a local signal; filtering reads the debounced copy
//! so typing does not re-render every group on each keystroke.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::{use_canvas, use_default_debounce, use_nodes};
use crate::providers::provider_error;
use crate::state::nodes::NodeCategory;

#[component]
pub fn NodePalette() -> impl IntoView {
    let (nodes, canvas) = match (use_nodes(), use_canvas()) {
        (Ok(nodes), Ok(canvas)) => (nodes, canvas),
        (Err(err), _) | (_, Err(err)) => return provider_error(&err),
    };
    let query = RwSignal::new(String::new());
    let debounced = match use_default_debounce::<String>(query.into()) {
        Ok(debounced) => debounced,
        Err(err) => return provider_error(&err),
    };

    let groups = move || {
        let catalog = nodes.catalog();
        let needle = debounced.get();
        let matches = catalog.search(&needle);
        NodeCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let items: Vec<_> = matches.iter().filter(|d| d.category == category).map(|d| (*d).clone()).collect();
                (!items.is_empty()).then_some((category, items))
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="node-palette" class:node-palette--collapsed=move || canvas.is_collapsed()>
            <input
                class="node-palette__search"
                type="search"
                placeholder="Search nodes"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {move || {
                groups()
                    .into_iter()
                    .map(|(category, items)| {
                        view! {
                            <section class="node-palette__group">
                                <h3>{category.label()}</h3>
                                <ul>
                                    {items
                                        .into_iter()
                                        .map(|def| {
                                            let id = def.id.clone();
                                            view! {
                                                <li
                                                    class="node-palette__item"
                                                    title=def.description
                                                    on:click=move |_| canvas.select(Some(id.clone()))
                                                >
                                                    {def.label}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </aside>
    }
    .into_any()
}
