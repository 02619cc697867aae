//! Typed consumer hooks for the agent-builder slices.
//!
//! Each hook resolves one slice from the nearest provider and wraps it in a
//! `Copy` handle with named mutators, so components never spell out the
//! functional update themselves. Mutators log instead of failing: the only
//! error left after a successful resolve is a write racing the provider's
//! unmount.

#[cfg(test)]
#[path = "domain_test.rs"]
mod domain_test;

use slices::{ContextError, SliceValue};

use super::slice::{SliceBinding, use_slice};
use crate::state::agents::{Agent, AgentsState};
use crate::state::canvas::CanvasState;
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::marketplace::{FilterUpdate, MarketplaceFilters};
use crate::state::nodes::NodeCatalog;
use crate::state::templates::{Template, TemplatesState};
use crate::state::theme::{Theme, ThemeState};
use crate::state::variables::{VariableError, VariablesState, validate_name};

fn commit<T: SliceValue>(action: &str, binding: SliceBinding<T>, f: impl FnOnce(&T) -> T) {
    if let Err(err) = binding.update(f) {
        log::warn!("{action} dropped: {err}");
    }
}

// =============================================================================
// THEME
// =============================================================================

#[derive(Clone, Copy)]
pub struct ThemeHandle(SliceBinding<ThemeState>);

impl ThemeHandle {
    pub fn theme(&self) -> Theme {
        self.0.value().theme
    }

    pub fn is_dark(&self) -> bool {
        self.0.value().is_dark()
    }

    pub fn toggle_theme(&self) {
        commit("toggle_theme", self.0, ThemeState::toggled);
    }

    pub fn set_theme(&self, theme: Theme) {
        commit("set_theme", self.0, |state| state.with_theme(theme));
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `ThemeProvider`.
pub fn use_theme() -> Result<ThemeHandle, ContextError> {
    use_slice().map(ThemeHandle)
}

// =============================================================================
// CANVAS
// =============================================================================

#[derive(Clone, Copy)]
pub struct CanvasHandle(SliceBinding<CanvasState>);

impl CanvasHandle {
    pub fn state(&self) -> CanvasState {
        self.0.value()
    }

    pub fn is_collapsed(&self) -> bool {
        self.0.value().is_collapsed
    }

    pub fn toggle_collapsed(&self) {
        commit("toggle_collapsed", self.0, CanvasState::toggled_collapsed);
    }

    pub fn toggle_grid(&self) {
        commit("toggle_grid", self.0, CanvasState::toggled_grid);
    }

    pub fn zoom_by(&self, factor: f64) {
        commit("zoom_by", self.0, |state| state.zoomed_by(factor));
    }

    pub fn pan_by(&self, dx: f64, dy: f64) {
        commit("pan_by", self.0, |state| state.panned_by(dx, dy));
    }

    pub fn select(&self, node_id: Option<String>) {
        commit("select", self.0, |state| state.with_selection(node_id));
    }

    pub fn reset_view(&self) {
        commit("reset_view", self.0, CanvasState::reset_view);
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `CanvasProvider`.
pub fn use_canvas() -> Result<CanvasHandle, ContextError> {
    use_slice().map(CanvasHandle)
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Clone, Copy)]
pub struct NodesHandle(SliceBinding<NodeCatalog>);

impl NodesHandle {
    pub fn catalog(&self) -> NodeCatalog {
        self.0.value()
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `NodesProvider`.
pub fn use_nodes() -> Result<NodesHandle, ContextError> {
    use_slice().map(NodesHandle)
}

// =============================================================================
// AGENTS
// =============================================================================

#[derive(Clone, Copy)]
pub struct AgentsHandle(SliceBinding<AgentsState>);

impl AgentsHandle {
    pub fn state(&self) -> AgentsState {
        self.0.value()
    }

    pub fn active(&self) -> Option<Agent> {
        self.0.value().active().cloned()
    }

    pub fn save_agent(&self, agent: Agent) {
        commit("save_agent", self.0, |state| state.with_agent(agent));
    }

    pub fn remove_agent(&self, id: &str) {
        commit("remove_agent", self.0, |state| state.without_agent(id));
    }

    pub fn select_agent(&self, id: Option<&str>) {
        commit("select_agent", self.0, |state| state.with_active(id));
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside an `AgentsProvider`.
pub fn use_agents() -> Result<AgentsHandle, ContextError> {
    use_slice().map(AgentsHandle)
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[derive(Clone, Copy)]
pub struct TemplatesHandle(SliceBinding<TemplatesState>);

impl TemplatesHandle {
    pub fn matching(&self, query: &str) -> Vec<Template> {
        self.0.value().matching(query).into_iter().cloned().collect()
    }

    pub fn save_template(&self, template: Template) {
        commit("save_template", self.0, |state| state.with_template(template));
    }

    pub fn remove_template(&self, id: &str) {
        commit("remove_template", self.0, |state| state.without_template(id));
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `TemplatesProvider`.
pub fn use_templates() -> Result<TemplatesHandle, ContextError> {
    use_slice().map(TemplatesHandle)
}

// =============================================================================
// VARIABLES
// =============================================================================

#[derive(Clone, Copy)]
pub struct VariablesHandle(SliceBinding<VariablesState>);

impl VariablesHandle {
    pub fn state(&self) -> VariablesState {
        self.0.value()
    }

    /// Validate and store a variable. Invalid names leave the slice untouched.
    ///
    /// # Errors
    ///
    /// [`VariableError`] for an invalid name.
    pub fn set_var(&self, name: &str, value: &str) -> Result<(), VariableError> {
        let name = validate_name(name)?.to_owned();
        let value = value.to_owned();
        commit("set_var", self.0, move |state| {
            let mut next = state.clone();
            next.vars.insert(name, value);
            next
        });
        Ok(())
    }

    pub fn remove_var(&self, name: &str) {
        commit("remove_var", self.0, |state| state.without_var(name));
    }

    pub fn interpolate(&self, template: &str) -> String {
        self.0.value().interpolate(template)
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `VariablesProvider`.
pub fn use_variables() -> Result<VariablesHandle, ContextError> {
    use_slice().map(VariablesHandle)
}

// =============================================================================
// MARKETPLACE FILTERS
// =============================================================================

#[derive(Clone, Copy)]
pub struct MarketplaceFiltersHandle(SliceBinding<MarketplaceFilters>);

impl MarketplaceFiltersHandle {
    pub fn filters(&self) -> MarketplaceFilters {
        self.0.value()
    }

    pub fn filters_untracked(&self) -> MarketplaceFilters {
        self.0.peek().unwrap_or_default()
    }

    pub fn update_filter(&self, update: FilterUpdate) {
        commit("update_filter", self.0, |filters| filters.updated(update));
    }

    pub fn clear_filters(&self) {
        commit("clear_filters", self.0, MarketplaceFilters::cleared);
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `MarketplaceProvider`.
pub fn use_marketplace_filters() -> Result<MarketplaceFiltersHandle, ContextError> {
    use_slice().map(MarketplaceFiltersHandle)
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Clone, Copy)]
pub struct ChatHandle(SliceBinding<ChatState>);

impl ChatHandle {
    pub fn state(&self) -> ChatState {
        self.0.value()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.0.peek().is_ok_and(|state| state.is_open)
    }

    pub fn set_draft(&self, draft: String) {
        commit("set_draft", self.0, |state| state.with_draft(draft));
    }

    pub fn send(&self) {
        commit("send", self.0, ChatState::submitted);
    }

    pub fn post(&self, message: ChatMessage) {
        commit("post", self.0, |state| state.with_message(message));
    }

    pub fn toggle_open(&self) {
        commit("toggle_open", self.0, ChatState::toggled_open);
    }
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside a `ChatProvider`.
pub fn use_chat() -> Result<ChatHandle, ContextError> {
    use_slice().map(ChatHandle)
}
