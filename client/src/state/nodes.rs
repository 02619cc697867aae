//! Node definitions available to the workflow canvas.

#[cfg(test)]
#[path = "nodes_test.rs"]
mod nodes_test;

use serde::{Deserialize, Serialize};

/// Palette grouping for node definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Trigger,
    Agent,
    Tool,
    Logic,
    Output,
}

impl NodeCategory {
    pub const ALL: [Self; 5] = [Self::Trigger, Self::Agent, Self::Tool, Self::Logic, Self::Output];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Trigger => "Triggers",
            Self::Agent => "Agents",
            Self::Tool => "Tools",
            Self::Logic => "Logic",
            Self::Output => "Outputs",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    pub label: String,
    pub category: NodeCategory,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl NodeDefinition {
    fn builtin(id: &str, label: &str, category: NodeCategory, description: &str, inputs: &[&str], outputs: &[&str]) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            category,
            description: description.to_owned(),
            inputs: inputs.iter().map(|s| (*s).to_owned()).collect(),
            outputs: outputs.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Every node definition the palette can offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeCatalog {
    pub definitions: Vec<NodeDefinition>,
}

impl Default for NodeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NodeCatalog {
    /// Definitions shipped with the editor.
    #[must_use]
    pub fn builtin() -> Self {
        use NodeCategory::{Agent, Logic, Output, Tool, Trigger};
        Self {
            definitions: vec![
                NodeDefinition::builtin("manual-trigger", "Manual Trigger", Trigger, "Start a run by hand", &[], &["payload"]),
                NodeDefinition::builtin("webhook", "Webhook", Trigger, "Start a run from an HTTP call", &[], &["request"]),
                NodeDefinition::builtin("schedule", "Schedule", Trigger, "Start a run on a cron schedule", &[], &["tick"]),
                NodeDefinition::builtin("llm-agent", "LLM Agent", Agent, "Prompt a model with tools", &["prompt", "context"], &["response"]),
                NodeDefinition::builtin("router-agent", "Router Agent", Agent, "Pick the next branch with a model", &["input"], &["route"]),
                NodeDefinition::builtin("http-request", "HTTP Request", Tool, "Call an external API", &["url", "body"], &["response"]),
                NodeDefinition::builtin("code", "Code", Tool, "Run a sandboxed script", &["input"], &["output"]),
                NodeDefinition::builtin("condition", "Condition", Logic, "Branch on an expression", &["value"], &["true", "false"]),
                NodeDefinition::builtin("loop", "Loop", Logic, "Repeat over a list", &["items"], &["item", "done"]),
                NodeDefinition::builtin("chat-reply", "Chat Reply", Output, "Send a message to the chat", &["message"], &[]),
            ],
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&NodeDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn by_category(&self, category: NodeCategory) -> Vec<&NodeDefinition> {
        self.definitions.iter().filter(|d| d.category == category).collect()
    }

    /// Case-insensitive match on label or description. A blank query matches all.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&NodeDefinition> {
        let needle = query.trim().to_lowercase();
        self.definitions
            .iter()
            .filter(|d| {
                needle.is_empty()
                    || d.label.to_lowercase().contains(&needle)
                    || d.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Insert `definition`, replacing any existing definition with the same id.
    #[must_use]
    pub fn with_definition(&self, definition: NodeDefinition) -> Self {
        let mut definitions = self.definitions.clone();
        match definitions.iter_mut().find(|d| d.id == definition.id) {
            Some(existing) => *existing = definition,
            None => definitions.push(definition),
        }
        Self { definitions }
    }
}
