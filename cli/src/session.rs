//! A conversation wired to a relay: one request per accepted send.

use crate::api::Relay;
use crate::conversation::{Conversation, Message, Mode, Outbound};

/// What happened to a call to [`ChatSession::send_message`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input or a send already in flight; nothing was recorded.
    Ignored,
    /// The assistant reply was appended.
    Replied,
    /// An `error` message was appended.
    Failed,
}

pub struct ChatSession<R> {
    relay: R,
    conversation: Conversation,
}

impl<R: Relay> ChatSession<R> {
    pub fn new(relay: R, mode: Mode) -> Self {
        Self { relay, conversation: Conversation::new(mode) }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    /// The most recently appended message.
    pub fn last_message(&self) -> Option<&Message> {
        self.conversation.messages().last()
    }

    /// Send `input` in the current mode and record the outcome.
    ///
    /// Takes `&mut self`, so a session never has two requests in flight.
    pub async fn send_message(&mut self, input: &str) -> SendOutcome {
        let Some(outbound) = self.conversation.begin_send(input) else {
            return SendOutcome::Ignored;
        };

        let result = match outbound {
            Outbound::Chat(request) => self
                .relay
                .chat(&request)
                .await
                .map(|reply| self.conversation.complete_chat(reply)),
            Outbound::Image(request) => self
                .relay
                .generate_image(&request)
                .await
                .map(|reply| self.conversation.complete_image(reply)),
        };

        match result {
            Ok(()) => SendOutcome::Replied,
            Err(err) => {
                self.conversation.fail(Some(&err.details()));
                SendOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
