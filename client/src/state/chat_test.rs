use super::*;

#[test]
fn submitted_moves_trimmed_draft_into_transcript() {
    let state = ChatState::default().with_draft("  hello there  ").submitted();
    assert_eq!(state.draft, "");
    let last = state.last_message().expect("message");
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "hello there");
}

#[test]
fn blank_draft_is_not_submitted() {
    let state = ChatState::default().with_draft("   ");
    assert_eq!(state.submitted(), state);
}

#[test]
fn messages_keep_order_and_unique_ids() {
    let state = ChatState::default()
        .with_message(ChatMessage::new(Role::System, "ready"))
        .with_message(ChatMessage::new(Role::Assistant, "hi"));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::System);
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

#[test]
fn toggled_open_keeps_draft() {
    let state = ChatState::default().with_draft("wip").toggled_open();
    assert!(state.is_open);
    assert_eq!(state.draft, "wip");
    assert!(!state.toggled_open().is_open);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Assistant).expect("serialize"), "\"assistant\"");
}
