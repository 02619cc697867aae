//! Skill and workflow templates with the nodes each one uses.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::{use_nodes, use_templates};
use crate::providers::provider_error;

#[component]
pub fn TemplateList() -> impl IntoView {
    let (templates, nodes) = match (use_templates(), use_nodes()) {
        (Ok(templates), Ok(nodes)) => (templates, nodes),
        (Err(err), _) | (_, Err(err)) => return provider_error(&err),
    };
    let query = RwSignal::new(String::new());

    view! {
        <div class="template-list">
            <input
                type="search"
                placeholder="Filter by name or tag"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ul>
                {move || {
                    let catalog = nodes.catalog();
                    templates
                        .matching(&query.get())
                        .into_iter()
                        .map(|template| {
                            let steps = template
                                .node_ids
                                .iter()
                                .map(|id| catalog.find(id).map_or_else(|| id.clone(), |d| d.label.clone()))
                                .collect::<Vec<_>>()
                                .join(" → ");
                            view! {
                                <li class="template-list__item">
                                    <h3>{template.name}</h3>
                                    <p>{template.description}</p>
                                    <p class="template-list__steps">{steps}</p>
                                    <p class="template-list__tags">{template.tags.join(", ")}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
    .into_any()
}
