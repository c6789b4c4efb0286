//! Reactive chat log state.

use leptos::prelude::{RwSignal, Update};
use session::{ChatLog, LogEntry, LogSink};

/// Log sink that appends into a signal watched by [`ChatLogView`].
///
/// [`ChatLogView`]: crate::components::chat_log::ChatLogView
#[derive(Clone, Copy)]
pub struct SignalLog(pub RwSignal<ChatLog>);

impl LogSink for SignalLog {
    fn append(&mut self, entry: LogEntry) {
        self.0.update(|log| log.append(entry));
    }
}
