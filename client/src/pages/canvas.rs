//! Workflow canvas: node palette, agents, and variables around the editor.

use leptos::prelude::*;

use crate::components::agent_list::AgentList;
use crate::components::node_palette::NodePalette;
use crate::components::sidebar_toggle::SidebarToggle;
use crate::components::variables_panel::VariablesPanel;
use crate::hooks::use_canvas;
use crate::layouts::CanvasLayout;

#[component]
pub fn CanvasPage() -> impl IntoView {
    view! {
        <CanvasLayout>
            <div class="page page--canvas">
                <SidebarToggle/>
                <NodePalette/>
                <CanvasStatus/>
                <aside class="page--canvas__inspector">
                    <AgentList/>
                    <VariablesPanel/>
                </aside>
            </div>
        </CanvasLayout>
    }
}

/// Zoom readout and view controls; the editor surface itself is external.
#[component]
fn CanvasStatus() -> impl IntoView {
    let Ok(canvas) = use_canvas() else {
        return ().into_any();
    };
    view! {
        <div class="canvas-status">
            <button class="btn" on:click=move |_| canvas.zoom_by(1.0 / 1.2)>"−"</button>
            <span>{move || format!("{}%", canvas.state().zoom_percent())}</span>
            <button class="btn" on:click=move |_| canvas.zoom_by(1.2)>"+"</button>
            <button class="btn" on:click=move |_| canvas.toggle_grid()>"Grid"</button>
            <button class="btn" on:click=move |_| canvas.reset_view()>"Reset"</button>
            <span class="canvas-status__selection">
                {move || canvas.state().selected_node.unwrap_or_default()}
            </span>
        </div>
    }
    .into_any()
}
