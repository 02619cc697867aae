//! Chat with an agent picked from the list.

use leptos::prelude::*;

use crate::components::agent_list::AgentList;
use crate::components::chat_panel::ChatPanel;
use crate::layouts::ChatLayout;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <ChatLayout>
            <div class="page page--chat">
                <AgentList/>
                <ChatPanel/>
            </div>
        </ChatLayout>
    }
}
