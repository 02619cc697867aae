//! Loading placeholders shown until the client takes over.

use leptos::prelude::*;

/// `count` grey blocks shaped like list rows.
#[component]
pub fn Skeleton(#[prop(default = 3)] count: usize, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("skeleton {class}") aria-busy="true">
            {(0..count).map(|_| view! { <div class="skeleton__row"></div> }).collect_view()}
        </div>
    }
}

/// False during server rendering, true once the component runs in the browser.
pub fn use_hydrated() -> ReadSignal<bool> {
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move |_| set_hydrated.set(true));
    hydrated
}
