use super::*;

#[test]
fn append_keeps_arrival_order() {
    let mut log = ChatLog::default();
    log.append(LogEntry::message("one"));
    log.append(LogEntry::server("two"));
    assert_eq!(log.len(), 2);
    assert_eq!(log.entries[0].text, "one");
    assert_eq!(log.last().map(|e| e.kind), Some(EntryKind::Server));
}

#[test]
fn disconnect_entry_carries_fixed_notice() {
    let entry = LogEntry::disconnect();
    assert_eq!(entry.kind, EntryKind::Disconnect);
    assert_eq!(entry.text, DISCONNECT_NOTICE);
}

#[test]
fn entries_serialize_with_lowercase_kind() {
    let json = serde_json::to_value(LogEntry::server("down in 5s")).expect("serialize");
    assert_eq!(json, serde_json::json!({ "kind": "server", "text": "down in 5s" }));
}

#[test]
fn new_log_is_empty() {
    let log = ChatLog::default();
    assert!(log.is_empty());
    assert!(log.last().is_none());
}
