//! Workspace settings: theme, agents, and global variables.

use leptos::prelude::*;

use crate::components::agent_list::AgentList;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::variables_panel::VariablesPanel;
use crate::layouts::SettingsLayout;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <SettingsLayout>
            <div class="page page--settings">
                <section>
                    <h2>"Appearance"</h2>
                    <ThemeToggle/>
                </section>
                <section>
                    <h2>"Agents"</h2>
                    <AgentList/>
                </section>
                <section>
                    <h2>"Variables"</h2>
                    <VariablesPanel/>
                </section>
            </div>
        </SettingsLayout>
    }
}
