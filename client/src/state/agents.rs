//! Agents configured in the builder and the one currently being edited.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub model: String,
    pub system_prompt: String,
}

impl Agent {
    /// New agent with a random id and the default model.
    #[must_use]
    pub fn draft(name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            system_prompt: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentsState {
    pub agents: Vec<Agent>,
    pub active_agent: Option<String>,
}

impl AgentsState {
    /// Insert or replace by id, keeping list order.
    #[must_use]
    pub fn with_agent(&self, agent: Agent) -> Self {
        let mut agents = self.agents.clone();
        match agents.iter_mut().find(|a| a.id == agent.id) {
            Some(existing) => *existing = agent,
            None => agents.push(agent),
        }
        Self { agents, active_agent: self.active_agent.clone() }
    }

    /// Remove by id; clears the active agent when it is the one removed.
    #[must_use]
    pub fn without_agent(&self, id: &str) -> Self {
        let agents = self.agents.iter().filter(|a| a.id != id).cloned().collect();
        let active_agent = self.active_agent.clone().filter(|active| active != id);
        Self { agents, active_agent }
    }

    /// Select an agent. Unknown ids leave the state unchanged.
    #[must_use]
    pub fn with_active(&self, id: Option<&str>) -> Self {
        match id {
            None => Self { active_agent: None, ..self.clone() },
            Some(id) if self.agents.iter().any(|a| a.id == id) => {
                Self { active_agent: Some(id.to_owned()), ..self.clone() }
            }
            Some(_) => self.clone(),
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&Agent> {
        let id = self.active_agent.as_deref()?;
        self.agents.iter().find(|a| a.id == id)
    }
}
