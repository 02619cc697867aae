//! Root application component with routing and the app-level scope.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::theme_toggle::ThemeToggle;
use crate::env::AppEnv;
use crate::layouts::app_composer;
use crate::pages::{
    canvas::CanvasPage, chat::ChatPage, marketplace::MarketplacePage, settings::SettingsPage, skills::SkillsPage,
};
use crate::providers::compose;
use crate::services::marketplace::MarketplaceService;
use crate::util::browser::window_size;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the environment, mounts the root scope (theme and viewport),
/// bridges window events into the hub, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let env = AppEnv::default();
    log::debug!("starting with {:?}", env.config);
    provide_context(env.clone());
    provide_context(MarketplaceService::mock());

    #[cfg(feature = "hydrate")]
    bridge_window_events(&env.hub);

    let root = app_composer(&env, window_size());

    view! {
        <Stylesheet id="leptos" href="/pkg/agentflow.css"/>
        <Title text="Agentflow"/>

        {compose(&root, Box::new(|| view! { <Shell/> }.into_any()))}
    }
}

#[component]
fn Shell() -> impl IntoView {
    view! {
        <Router>
            <nav class="app-nav">
                <A href="/">"Canvas"</A>
                <A href="/skills">"Skills"</A>
                <A href="/marketplace">"Marketplace"</A>
                <A href="/chat">"Chat"</A>
                <A href="/settings">"Settings"</A>
                <span class="app-nav__spacer"></span>
                <ThemeToggle/>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CanvasPage/>
                    <Route path=StaticSegment("skills") view=SkillsPage/>
                    <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Forward window `resize` and `mousedown` into the hub for the app's lifetime.
#[cfg(feature = "hydrate")]
fn bridge_window_events(hub: &slices::EventHub) {
    use slices::WindowEvent;

    let resize_hub = hub.clone();
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        let (width, height) = window_size();
        resize_hub.dispatch(&WindowEvent::Resize { width, height });
    });
    let click_hub = hub.clone();
    let mousedown = window_event_listener(leptos::ev::mousedown, move |ev| {
        click_hub.dispatch(&press_event(&ev));
    });
    on_cleanup(move || {
        resize.remove();
        mousedown.remove();
    });
}

/// A mousedown tagged with every outside-click target enclosing the pressed node,
/// innermost first.
#[cfg(feature = "hydrate")]
fn press_event(ev: &web_sys::MouseEvent) -> slices::WindowEvent {
    use slices::{ELEMENT_ID_ATTR, ElementId, WindowEvent};
    use wasm_bindgen::JsCast;

    let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
    let Some(pressed) = ev.target().and_then(|target| target.dyn_into::<web_sys::Element>().ok()) else {
        return WindowEvent::press(x, y);
    };
    let mut ancestors = Vec::new();
    let mut node = Some(pressed);
    while let Some(element) = node {
        if let Some(id) = element.get_attribute(ELEMENT_ID_ATTR).as_deref().and_then(ElementId::parse) {
            ancestors.push(id);
        }
        node = element.parent_element();
    }
    WindowEvent::press_within(x, y, ancestors)
}
