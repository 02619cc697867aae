use super::*;

#[test]
fn builtin_catalog_covers_every_category() {
    let catalog = NodeCatalog::default();
    for category in NodeCategory::ALL {
        assert!(!catalog.by_category(category).is_empty(), "{category:?} has no nodes");
    }
}

#[test]
fn builtin_ids_are_unique() {
    let catalog = NodeCatalog::builtin();
    let mut ids: Vec<_> = catalog.definitions.iter().map(|d| d.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.definitions.len());
}

#[test]
fn find_by_id() {
    let catalog = NodeCatalog::builtin();
    assert_eq!(catalog.find("condition").map(|d| d.category), Some(NodeCategory::Logic));
    assert!(catalog.find("missing").is_none());
}

#[test]
fn search_is_case_insensitive_over_label_and_description() {
    let catalog = NodeCatalog::builtin();
    let labels: Vec<_> = catalog.search("WEBHOOK").iter().map(|d| d.id.as_str()).collect();
    assert_eq!(labels, vec!["webhook"]);
    assert!(catalog.search("external api").iter().any(|d| d.id == "http-request"));
    assert_eq!(catalog.search("  ").len(), catalog.definitions.len());
}

#[test]
fn with_definition_upserts() {
    let catalog = NodeCatalog::builtin();
    let mut code = catalog.find("code").cloned().expect("code node");
    code.label = "Script".into();

    let replaced = catalog.with_definition(code);
    assert_eq!(replaced.definitions.len(), catalog.definitions.len());
    assert_eq!(replaced.find("code").map(|d| d.label.as_str()), Some("Script"));

    let added = catalog.with_definition(NodeDefinition {
        id: "email".into(),
        label: "Email".into(),
        category: NodeCategory::Output,
        description: "Send an email".into(),
        inputs: vec!["to".into()],
        outputs: Vec::new(),
    });
    assert_eq!(added.definitions.len(), catalog.definitions.len() + 1);
}

#[test]
fn category_labels_are_plural() {
    assert_eq!(NodeCategory::Trigger.label(), "Triggers");
    assert_eq!(NodeCategory::Logic.label(), "Logic");
}
