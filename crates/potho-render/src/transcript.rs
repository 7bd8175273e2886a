//! Chat transcripts and JSON payloads.
//!
//! Assistant replies go through the renderer; what the user typed is shown
//! exactly as written.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::parsing::{DisplayBlock, render_literal, render_value};

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Failed to parse JSON payload: {source}")]
    PayloadParseError { source: serde_json::Error },

    #[error("Failed to parse chat transcript: {source}")]
    TranscriptParseError { source: serde_json::Error },
}

/// Who wrote a message. Any sender other than `ai` is treated as the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Sender {
    Ai,
    User,
}

impl From<String> for Sender {
    fn from(s: String) -> Self {
        if s == "ai" { Sender::Ai } else { Sender::User }
    }
}

/// A chat message as the backend returns it. `text` is kept untyped: a
/// missing or non-string text renders to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    #[serde(default)]
    pub text: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    pub sender: Sender,
    pub blocks: Vec<DisplayBlock>,
}

/// Renders one message according to its sender.
pub fn render_message(msg: &Message) -> RenderedMessage {
    let blocks = match (msg.sender, &msg.text) {
        (Sender::Ai, text) => render_value(text),
        (Sender::User, Value::String(s)) => render_literal(s),
        (Sender::User, _) => vec![],
    };
    RenderedMessage {
        sender: msg.sender,
        blocks,
    }
}

/// Renders every message, preserving order.
pub fn render_transcript(messages: &[Message]) -> Vec<RenderedMessage> {
    messages.iter().map(render_message).collect()
}

/// Parses a JSON array of `{"sender": ..., "text": ...}` messages.
pub fn parse_transcript(json: &str) -> Result<Vec<Message>, TranscriptError> {
    serde_json::from_str(json).map_err(|source| TranscriptError::TranscriptParseError { source })
}

pub fn parse_payload(json: &str) -> Result<Value, TranscriptError> {
    serde_json::from_str(json).map_err(|source| TranscriptError::PayloadParseError { source })
}

/// Renders the value at a JSON pointer such as `/analysis`. A missing value
/// renders to nothing, like any other non-string.
pub fn render_pointer(payload: &Value, pointer: &str) -> Vec<DisplayBlock> {
    match payload.pointer(pointer) {
        Some(v) => render_value(v),
        None => {
            log::debug!("no value at JSON pointer {pointer}");
            vec![]
        }
    }
}
