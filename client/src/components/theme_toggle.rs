//! Light/dark switch in the app header.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::use_theme;
use crate::providers::provider_error;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = match use_theme() {
        Ok(theme) => theme,
        Err(err) => return provider_error(&err),
    };

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle_theme()
            title=move || if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
    .into_any()
}
