use super::*;

fn agent(id: &str, name: &str) -> Agent {
    Agent { id: id.into(), name: name.into(), model: DEFAULT_MODEL.into(), system_prompt: String::new() }
}

#[test]
fn draft_trims_name_and_uses_default_model() {
    let draft = Agent::draft("  Researcher ");
    assert_eq!(draft.name, "Researcher");
    assert_eq!(draft.model, DEFAULT_MODEL);
    assert!(!draft.id.is_empty());
    assert_ne!(draft.id, Agent::draft("Researcher").id);
}

#[test]
fn with_agent_appends_then_replaces() {
    let state = AgentsState::default().with_agent(agent("a", "Alpha")).with_agent(agent("b", "Beta"));
    assert_eq!(state.agents.len(), 2);

    let renamed = state.with_agent(agent("a", "Alpha 2"));
    assert_eq!(renamed.agents.len(), 2);
    assert_eq!(renamed.agents[0].name, "Alpha 2");
}

#[test]
fn with_active_ignores_unknown_ids() {
    let state = AgentsState::default().with_agent(agent("a", "Alpha"));
    assert_eq!(state.with_active(Some("a")).active().map(|a| a.name.as_str()), Some("Alpha"));
    assert_eq!(state.with_active(Some("zzz")).active_agent, None);
    assert_eq!(state.with_active(Some("a")).with_active(None).active_agent, None);
}

#[test]
fn removing_active_agent_clears_selection() {
    let state = AgentsState::default()
        .with_agent(agent("a", "Alpha"))
        .with_agent(agent("b", "Beta"))
        .with_active(Some("a"));

    let kept = state.without_agent("b");
    assert_eq!(kept.active_agent.as_deref(), Some("a"));

    let removed = state.without_agent("a");
    assert_eq!(removed.active_agent, None);
    assert_eq!(removed.agents.len(), 1);
}
