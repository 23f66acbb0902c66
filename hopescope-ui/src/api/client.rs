//! HTTP API Client
//!
//! Posts chat prompts with `fetch` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use hopescope::chat::{ChatEndpoint, ChatError, ChatReply, ChatTransport};

use crate::dom;

/// Chat transport for the browser
///
/// No timeout or abort signal is attached; a request that never settles
/// leaves the widget pending.
pub struct FetchTransport {
    endpoint: ChatEndpoint,
}

impl FetchTransport {
    pub fn new(endpoint: ChatEndpoint) -> Self {
        Self { endpoint }
    }

    async fn fetch_reply(&self, prompt: &str) -> Result<ChatReply, ChatError> {
        let response = Request::post(&self.endpoint.url_for(prompt))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        ChatReply::from_json(&body)
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(ChatEndpoint::relative())
    }
}

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn send_prompt(&self, prompt: &str) -> Result<ChatReply, ChatError> {
        let result = self.fetch_reply(prompt).await;
        if let Err(e) = &result {
            dom::log_error(&format!("Chatbot fetch error: {}", e));
        }
        result
    }
}
