//! Reply backends

use crate::ChatMessage;

/// Produces the assistant's reply to a prompt
pub trait Responder {
    /// `history` already ends with the user's prompt
    fn respond(&mut self, prompt: &str, history: &[ChatMessage]) -> String;
}

/// Placeholder backend that echoes the prompt inside a fixed sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubResponder;

impl Responder for StubResponder {
    fn respond(&mut self, prompt: &str, _history: &[ChatMessage]) -> String {
        format!(
            "This is a simulated response from a local LLM. In a real implementation, this would process your query: \"{}\" and provide appropriate assistance.",
            prompt
        )
    }
}

impl<F> Responder for F
where
    F: FnMut(&str, &[ChatMessage]) -> String,
{
    fn respond(&mut self, prompt: &str, history: &[ChatMessage]) -> String {
        self(prompt, history)
    }
}
