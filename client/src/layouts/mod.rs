//! Page layouts and the provider sets each one composes.
//!
//! ARCHITECTURE
//! ============
//! Theme and viewport live at the app root. Each layout adds the slices its
//! pages consume, in an order that satisfies every declared dependency:
//!
//! - canvas: nodes, canvas, agents, variables
//! - marketplace: marketplace filters
//! - skills: nodes, templates, variables
//! - chat: agents, chat, variables
//! - settings: agents, variables


use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use slices::Composer;

use crate::env::{AppEnv, use_env};
use crate::providers::{
    agents_provider, canvas_provider, chat_provider, compose, marketplace_provider, nodes_provider, provider_error,
    templates_provider, theme_provider, variables_provider, viewport_provider,
};

/// Root providers: theme and viewport.
pub fn app_composer(env: &AppEnv, window_size: (u32, u32)) -> Composer {
    Composer::new("app").with(theme_provider(env)).with(viewport_provider(env, window_size))
}

pub fn canvas_composer(env: &AppEnv) -> Composer {
    Composer::new("canvas")
        .with(nodes_provider())
        .with(canvas_provider(env))
        .with(agents_provider())
        .with(variables_provider())
}

pub fn marketplace_composer() -> Composer {
    Composer::new("marketplace").with(marketplace_provider())
}

pub fn skills_composer() -> Composer {
    Composer::new("skills")
        .with(nodes_provider())
        .with(templates_provider())
        .with(variables_provider())
}

pub fn chat_composer() -> Composer {
    Composer::new("chat").with(agents_provider()).with(chat_provider()).with(variables_provider())
}

pub fn settings_composer() -> Composer {
    Composer::new("settings").with(agents_provider()).with(variables_provider())
}

#[component]
pub fn CanvasLayout(children: Children) -> impl IntoView {
    let env = match use_env() {
        Ok(env) => env,
        Err(err) => return provider_error(&err),
    };
    view! { <div class="layout layout--canvas">{compose(&canvas_composer(&env), children)}</div> }.into_any()
}

#[component]
pub fn MarketplaceLayout(children: Children) -> impl IntoView {
    view! { <div class="layout layout--marketplace">{compose(&marketplace_composer(), children)}</div> }
}

#[component]
pub fn SkillsLayout(children: Children) -> impl IntoView {
    view! { <div class="layout layout--skills">{compose(&skills_composer(), children)}</div> }
}

#[component]
pub fn ChatLayout(children: Children) -> impl IntoView {
    view! { <div class="layout layout--chat">{compose(&chat_composer(), children)}</div> }
}

#[component]
pub fn SettingsLayout(children: Children) -> impl IntoView {
    view! { <div class="layout layout--settings">{compose(&settings_composer(), children)}</div> }
}
