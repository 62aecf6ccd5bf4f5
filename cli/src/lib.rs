//! Terminal client for the chat relay.
//!
//! `conversation` holds the message log and send state machine, `api` talks
//! to the relay over HTTP, `session` glues the two together, and `repl`
//! handles interactive input and output.

pub mod api;
pub mod conversation;
pub mod repl;
pub mod session;

pub use api::{ClientError, Relay, RelayClient};
pub use conversation::{Conversation, Message, MessageKind, Mode, Outbound};
pub use session::{ChatSession, SendOutcome};
