//! Theme application on the document root.
//!
//! The active theme is written to `data-theme` on `<html>` so stylesheets can
//! switch palettes. The stored preference lives in the theme slice; this
//! module only reads the system default and touches the DOM.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::Theme;

/// Theme implied by `prefers-color-scheme`, or light outside the browser.
pub fn system_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme.as_attr()) {
            log::warn!("failed to apply theme: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
