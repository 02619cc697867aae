//! Workflow templates and skills shown in the skills library.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Node definition ids the template instantiates, in canvas order.
    pub node_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplatesState {
    pub templates: Vec<Template>,
}

impl Default for TemplatesState {
    fn default() -> Self {
        Self { templates: starter_templates() }
    }
}

impl TemplatesState {
    #[must_use]
    pub fn with_template(&self, template: Template) -> Self {
        let mut templates = self.templates.clone();
        match templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => templates.push(template),
        }
        Self { templates }
    }

    #[must_use]
    pub fn without_template(&self, id: &str) -> Self {
        Self { templates: self.templates.iter().filter(|t| t.id != id).cloned().collect() }
    }

    /// Case-insensitive match on name or any tag.
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<&Template> {
        let needle = query.trim().to_lowercase();
        self.templates
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.name.to_lowercase().contains(&needle)
                    || t.tags.iter().any(|tag| tag.to_lowercase() == needle)
            })
            .collect()
    }
}

fn starter_templates() -> Vec<Template> {
    let template = |id: &str, name: &str, description: &str, tags: &[&str], nodes: &[&str]| Template {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|s| (*s).to_owned()).collect(),
        node_ids: nodes.iter().map(|s| (*s).to_owned()).collect(),
    };
    vec![
        template(
            "support-triage",
            "Support Triage",
            "Route inbound tickets to the right agent",
            &["support", "routing"],
            &["webhook", "router-agent", "chat-reply"],
        ),
        template(
            "daily-digest",
            "Daily Digest",
            "Summarize yesterday's activity every morning",
            &["summary", "schedule"],
            &["schedule", "http-request", "llm-agent", "chat-reply"],
        ),
        template(
            "research-assistant",
            "Research Assistant",
            "Search, read, and answer with citations",
            &["research", "agent"],
            &["manual-trigger", "llm-agent", "loop", "chat-reply"],
        ),
    ]
}
