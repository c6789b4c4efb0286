//! Chat history rendered into the host page's log container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries are appended by the session through `SignalLog`. Payload text is
//! emitted as DOM text nodes, so markup in a payload is shown literally.

#[cfg(test)]
#[path = "chat_log_test.rs"]
mod chat_log_test;

use leptos::prelude::*;
use session::{ChatLog, EntryKind};

/// CSS class for an entry's styled wrapper.
pub fn entry_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Message => "chat-log__entry chat-log__entry--message",
        EntryKind::Server => "chat-log__entry chat-log__entry--server",
        EntryKind::Disconnect => "chat-log__entry chat-log__entry--error",
    }
}

/// Append-only list of chat entries.
#[component]
pub fn ChatLogView(log: RwSignal<ChatLog>) -> impl IntoView {
    view! {
        <div class="chat-log">
            {move || {
                log.with(|state| {
                    state
                        .entries
                        .iter()
                        .map(|entry| {
                            let class = entry_class(entry.kind);
                            let text = entry.text.clone();
                            view! { <p class=class>{text}</p> }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
