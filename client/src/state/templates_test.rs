use super::*;

use crate::state::nodes::NodeCatalog;

#[test]
fn starter_templates_reference_builtin_nodes() {
    let catalog = NodeCatalog::builtin();
    for template in &TemplatesState::default().templates {
        for node_id in &template.node_ids {
            assert!(catalog.find(node_id).is_some(), "{} references unknown node {node_id}", template.id);
        }
    }
}

#[test]
fn matching_checks_name_and_exact_tag() {
    let state = TemplatesState::default();
    let by_name: Vec<_> = state.matching("digest").iter().map(|t| t.id.as_str()).collect();
    assert_eq!(by_name, vec!["daily-digest"]);
    let by_tag: Vec<_> = state.matching("Routing").iter().map(|t| t.id.as_str()).collect();
    assert_eq!(by_tag, vec!["support-triage"]);
    assert!(state.matching("rout").is_empty());
    assert_eq!(state.matching("").len(), state.templates.len());
}

#[test]
fn with_and_without_template() {
    let state = TemplatesState { templates: Vec::new() };
    let added = state.with_template(Template {
        id: "t".into(),
        name: "T".into(),
        description: String::new(),
        tags: Vec::new(),
        node_ids: Vec::new(),
    });
    assert_eq!(added.templates.len(), 1);
    assert!(added.without_template("t").templates.is_empty());
    assert_eq!(added.without_template("other").templates.len(), 1);
}
