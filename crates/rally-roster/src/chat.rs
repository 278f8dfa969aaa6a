//! Member-to-member chat messages.
//!
//! Only the data model lives here — rendering, delivery, and the AI
//! auto-reply service are external collaborators that consume these plain
//! structs.

use rally_core::{MemberId, MessageId, Timestamp};

/// One chat message between two members.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: MemberId,
    pub recipient: MemberId,
    pub text: String,
    pub sent_at: Timestamp,
}

/// An append-only message log.
#[derive(Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its identity.
    pub fn post(
        &mut self,
        sender: MemberId,
        recipient: MemberId,
        text: impl Into<String>,
        sent_at: Timestamp,
    ) -> MessageId {
        let id = MessageId(self.next);
        self.next += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            recipient,
            text: text.into(),
            sent_at,
        });
        id
    }

    /// Every message, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages exchanged between `a` and `b` (either direction), oldest first.
    pub fn conversation(&self, a: MemberId, b: MemberId) -> impl Iterator<Item = &ChatMessage> {
        self.messages
            .iter()
            .filter(move |m| (m.sender == a && m.recipient == b) || (m.sender == b && m.recipient == a))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
