//! Agents in the current workspace with add, select, and remove controls.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::domain::use_agents;
use crate::providers::provider_error;
use crate::state::agents::Agent;

#[component]
pub fn AgentList() -> impl IntoView {
    let agents = match use_agents() {
        Ok(agents) => agents,
        Err(err) => return provider_error(&err),
    };
    let draft_name = RwSignal::new(String::new());

    let on_add = move |_| {
        let name = draft_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        let agent = Agent::draft(&name);
        let id = agent.id.clone();
        agents.save_agent(agent);
        agents.select_agent(Some(&id));
        draft_name.set(String::new());
    };

    view! {
        <div class="agent-list">
            <ul>
                {move || {
                    let state = agents.state();
                    let active = state.active_agent.clone();
                    state
                        .agents
                        .into_iter()
                        .map(|agent| {
                            let is_active = active.as_deref() == Some(agent.id.as_str());
                            let select_id = agent.id.clone();
                            let remove_id = agent.id.clone();
                            view! {
                                <li class="agent-list__item" class:agent-list__item--active=is_active>
                                    <button class="agent-list__name" on:click=move |_| agents.select_agent(Some(&select_id))>
                                        {agent.name}
                                    </button>
                                    <span class="agent-list__model">{agent.model}</span>
                                    <button class="btn agent-list__remove" on:click=move |_| agents.remove_agent(&remove_id)>
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="agent-list__add">
                <input
                    placeholder="New agent name"
                    prop:value=move || draft_name.get()
                    on:input=move |ev| draft_name.set(event_target_value(&ev))
                />
                <button class="btn" on:click=on_add>"Add"</button>
            </div>
        </div>
    }
    .into_any()
}
