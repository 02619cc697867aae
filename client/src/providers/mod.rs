//! Provider components: one owned slice each, installed around `children`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `*_provider` functions return plain `ProviderSpec`
//! values so layouts can list them in a `Composer` and native tests can
//! mount them without a DOM. The components below wrap a single provider for
//! the cases where a page needs one provider on its own.
//!
//! DESIGN
//! ======
//! `compose` mounts a composer under the nearest enclosing scope, places the
//! new scope in context for the subtree, and unmounts it on cleanup. Theme
//! and canvas state persist to storage; everything else starts fresh on
//! every mount.


use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use slices::{Composer, ContextError, PersistedProvider, ProviderSpec, Scope, SliceKind, SliceProvider, ViewportProvider};

use crate::env::{AppEnv, use_env};
use crate::state::agents::AgentsState;
use crate::state::canvas::CanvasState;
use crate::state::chat::ChatState;
use crate::state::marketplace::MarketplaceFilters;
use crate::state::nodes::NodeCatalog;
use crate::state::templates::TemplatesState;
use crate::state::theme::ThemeState;
use crate::state::variables::VariablesState;
use crate::util::theme_dom;

// =============================================================================
// PROVIDER SPECS
// =============================================================================

/// Persisted theme that also keeps `data-theme` on `<html>` in sync.
pub struct ThemeSpec {
    inner: PersistedProvider<ThemeState>,
}

impl ProviderSpec for ThemeSpec {
    fn name(&self) -> &str {
        "theme"
    }

    fn provides(&self) -> SliceKind {
        SliceKind::of::<ThemeState>()
    }

    fn mount(&self, scope: &Scope) -> Result<(), ContextError> {
        self.inner.mount(scope)?;
        let theme = scope.resolve::<ThemeState>()?;
        theme_dom::apply(theme.get()?.theme);
        let sync = theme.subscribe(|state| theme_dom::apply(state.theme))?;
        scope.on_cleanup(move || sync.unsubscribe());
        Ok(())
    }
}

/// Theme seeded from the system preference when nothing is stored.
pub fn theme_provider(env: &AppEnv) -> ThemeSpec {
    let inner = PersistedProvider::new("theme", env.storage.clone(), env.key("theme"), || {
        ThemeState::new(theme_dom::system_preference())
    });
    ThemeSpec { inner }
}

pub fn canvas_provider(env: &AppEnv) -> PersistedProvider<CanvasState> {
    PersistedProvider::new("canvas", env.storage.clone(), env.key("canvas"), CanvasState::default)
}

/// Viewport tracked from `initial` using the configured breakpoints.
pub fn viewport_provider(env: &AppEnv, initial: (u32, u32)) -> ViewportProvider {
    ViewportProvider::new(env.hub.clone(), env.config.breakpoints, initial)
}

pub fn nodes_provider() -> SliceProvider<NodeCatalog> {
    SliceProvider::new("nodes", NodeCatalog::builtin)
}

pub fn agents_provider() -> SliceProvider<AgentsState> {
    SliceProvider::new("agents", AgentsState::default)
}

/// Templates reference node definitions, so the catalog must be mounted first.
pub fn templates_provider() -> SliceProvider<TemplatesState> {
    SliceProvider::new("templates", TemplatesState::default).requiring::<NodeCatalog>()
}

pub fn variables_provider() -> SliceProvider<VariablesState> {
    SliceProvider::new("variables", VariablesState::default)
}

pub fn marketplace_provider() -> SliceProvider<MarketplaceFilters> {
    SliceProvider::new("marketplace", MarketplaceFilters::default)
}

/// Chat addresses the active agent, so agents must be mounted first.
pub fn chat_provider() -> SliceProvider<ChatState> {
    SliceProvider::new("chat", ChatState::default).requiring::<AgentsState>()
}

// =============================================================================
// MOUNTING
// =============================================================================

/// Mount `composer` under the enclosing scope for the lifetime of this owner.
///
/// # Errors
///
/// Whatever [`Composer::mount`] reports; nothing is left mounted on error.
pub fn mount_composer(composer: &Composer) -> Result<Scope, ContextError> {
    let parent = use_context::<Scope>();
    let scope = composer.mount(parent.as_ref())?;
    provide_context(scope.clone());
    let owned = scope.clone();
    on_cleanup(move || owned.unmount());
    Ok(scope)
}

/// Render `children` inside a freshly mounted `composer`.
pub fn compose(composer: &Composer, children: Children) -> AnyView {
    match mount_composer(composer) {
        Ok(_) => children().into_any(),
        Err(err) => provider_error(&err),
    }
}

/// Visible placeholder for a subtree whose providers failed to mount.
pub fn provider_error(err: &ContextError) -> AnyView {
    log::error!("{err}");
    let message = err.to_string();
    view! { <div class="provider-error" role="alert">{message}</div> }.into_any()
}

fn single(provider: impl ProviderSpec + 'static) -> Composer {
    let label = provider.name().to_owned();
    Composer::new(label).with(provider)
}

// =============================================================================
// COMPONENTS
// =============================================================================

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    match use_env() {
        Ok(env) => compose(&single(theme_provider(&env)), children),
        Err(err) => provider_error(&err),
    }
}

#[component]
pub fn CanvasProvider(children: Children) -> impl IntoView {
    match use_env() {
        Ok(env) => compose(&single(canvas_provider(&env)), children),
        Err(err) => provider_error(&err),
    }
}

#[component]
pub fn NodesProvider(children: Children) -> impl IntoView {
    compose(&single(nodes_provider()), children)
}

#[component]
pub fn AgentsProvider(children: Children) -> impl IntoView {
    compose(&single(agents_provider()), children)
}

#[component]
pub fn TemplatesProvider(children: Children) -> impl IntoView {
    compose(&single(templates_provider()), children)
}

#[component]
pub fn VariablesProvider(children: Children) -> impl IntoView {
    compose(&single(variables_provider()), children)
}

#[component]
pub fn MarketplaceProvider(children: Children) -> impl IntoView {
    compose(&single(marketplace_provider()), children)
}

#[component]
pub fn ChatProvider(children: Children) -> impl IntoView {
    compose(&single(chat_provider()), children)
}
