//! Community chat room with a locally held message log.

use leptos::*;

const MAX_MESSAGES: usize = 200;
const LOCAL_AUTHOR: &str = "you";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    seq: u64,
    author: String,
    body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatLog {
    next_seq: u64,
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    fn seeded() -> Self {
        let mut log = Self {
            next_seq: 1,
            messages: Vec::new(),
        };
        log.push("mod", "Welcome to the community room.");
        log.push("mira", "Governance call starts at 18:00 UTC.");
        log
    }

    /// Appends a message, dropping blank input and trimming the log to [`MAX_MESSAGES`].
    fn push(&mut self, author: &str, body: &str) -> bool {
        let body = body.trim();
        if body.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            seq: self.next_seq,
            author: author.to_string(),
            body: body.to_string(),
        });
        self.next_seq += 1;
        if self.messages.len() > MAX_MESSAGES {
            let overflow = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(0..overflow);
        }
        true
    }
}

#[component]
/// Chat room surface. Messages stay in the panel and are dropped when the window closes.
pub fn CommunityChatPanel() -> impl IntoView {
    let log = create_rw_signal(ChatLog::seeded());
    let draft = create_rw_signal(String::new());

    let send = move || {
        let body = draft.get_untracked();
        let mut sent = false;
        log.update(|l| sent = l.push(LOCAL_AUTHOR, &body));
        if sent {
            draft.set(String::new());
        }
    };

    view! {
        <div class="app-shell app-chat">
            <ol class="app-chat-log" aria-live="polite">
                <For each=move || log.get().messages key=|m| m.seq let:message>
                    <li><strong>{message.author}</strong>": "{message.body}</li>
                </For>
            </ol>
            <form class="app-chat-compose" on:submit=move |ev| {
                ev.prevent_default();
                send();
            }>
                <input
                    aria-label="Message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_are_ignored() {
        let mut log = ChatLog::seeded();
        let before = log.clone();
        assert!(!log.push(LOCAL_AUTHOR, "   "));
        assert_eq!(log, before);
    }

    #[test]
    fn log_is_capped_and_sequence_keeps_growing() {
        let mut log = ChatLog::seeded();
        for i in 0..(MAX_MESSAGES + 10) {
            log.push(LOCAL_AUTHOR, &format!("msg {i}"));
        }
        assert_eq!(log.messages.len(), MAX_MESSAGES);
        let last = log.messages.last().expect("last message");
        assert_eq!(last.body, format!("msg {}", MAX_MESSAGES + 9));
        assert_eq!(last.seq, (MAX_MESSAGES + 12) as u64);
    }
}
