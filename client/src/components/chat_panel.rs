//! Chat transcript and composer for talking to the active agent.
//!
//! The panel closes when the user clicks anywhere outside it.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::{use_agents, use_chat, use_outside_click};
use crate::providers::provider_error;
use crate::state::chat::Role;

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "chat-panel__message--user",
        Role::Assistant => "chat-panel__message--assistant",
        Role::System => "chat-panel__message--system",
    }
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    let (chat, agents) = match (use_chat(), use_agents()) {
        (Ok(chat), Ok(agents)) => (chat, agents),
        (Err(err), _) | (_, Err(err)) => return provider_error(&err),
    };
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    if let Err(err) = use_outside_click(vec![panel_ref], move || {
        if chat.is_open_untracked() {
            chat.toggle_open();
        }
    }) {
        return provider_error(&err);
    }

    let title = move || agents.active().map_or_else(|| "No agent selected".to_owned(), |a| a.name);

    view! {
        <div class="chat-panel" class:chat-panel--open=move || chat.state().is_open node_ref=panel_ref>
            <button class="chat-panel__header" on:click=move |_| chat.toggle_open()>
                {title}
            </button>
            <Show when=move || chat.state().is_open>
                <ol class="chat-panel__messages">
                    {move || {
                        chat.state()
                            .messages
                            .into_iter()
                            .map(|message| {
                                view! { <li class=format!("chat-panel__message {}", role_class(message.role))>{message.content}</li> }
                            })
                            .collect_view()
                    }}
                </ol>
                <form
                    class="chat-panel__composer"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        chat.send();
                    }
                >
                    <input
                        placeholder="Message"
                        prop:value=move || chat.state().draft
                        on:input=move |ev| chat.set_draft(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Send"</button>
                </form>
            </Show>
        </div>
    }
    .into_any()
}
