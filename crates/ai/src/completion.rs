//! Completion strategies for the advisor.
//!
//! The advisor never decides at request time whether a model is reachable.
//! One `CompletionProviderTrait` implementation is chosen when the process
//! starts (see `config::build_completion_provider`) and injected into the
//! service:
//!
//! - `LiveCompletionProvider`: OpenAI-compatible chat completions via rig-core
//! - `StubCompletionProvider`: deterministic canned answers for offline use
//!
//! Both answer either in one piece (`complete`) or as a stream of text deltas
//! (`stream`) whose concatenation is the full answer.

use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use log::{debug, error};
use portifi_core::utils::format_utils::format_currency;
use reqwest::Client as HttpClient;
use rig::{
    agent::MultiTurnStreamItem,
    client::CompletionClient,
    completion::{Chat, Message},
    message::{AssistantContent, Text, UserContent},
    providers::openai,
    streaming::{StreamedAssistantContent, StreamingChat},
    OneOrMany,
};
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AiError;
use crate::types::{ChatMessage, ChatRole};

/// Provider name reported for live completions.
pub const LIVE_PROVIDER_NAME: &str = "openai";

/// Provider name reported for canned completions.
pub const STUB_PROVIDER_NAME: &str = "stub";

/// Deltas buffered between the provider task and the consumer.
const STREAM_BUFFER: usize = 100;

/// Text deltas of an answer, in order. An `Err` item ends the stream.
pub type CompletionStream = BoxStream<'static, Result<String, AiError>>;

/// Everything a completion strategy needs to answer one conversation.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    /// Full conversation, oldest first; the last user message is the prompt
    pub messages: Vec<ChatMessage>,
    /// Total value of the portfolio described in the system prompt
    pub portfolio_value: Decimal,
}

/// Trait for completion strategies.
#[async_trait]
pub trait CompletionProviderTrait: Send + Sync {
    /// Short identifier reported back to the client.
    fn name(&self) -> &'static str;

    /// Produces the assistant's answer to the conversation.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, AiError>;

    /// Streams the assistant's answer as text deltas.
    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, AiError>;
}

// ============================================================================
// Live Provider
// ============================================================================

/// Chat completions against an OpenAI-compatible endpoint.
pub struct LiveCompletionProvider {
    client: openai::CompletionsClient<HttpClient>,
    model: String,
}

impl LiveCompletionProvider {
    /// Creates the client. `base_url` overrides the default OpenAI endpoint.
    pub fn new(api_key: &str, model: &str, base_url: Option<&str>) -> Result<Self, AiError> {
        if api_key.trim().is_empty() {
            return Err(AiError::MissingApiKey(LIVE_PROVIDER_NAME.to_string()));
        }

        let key = api_key.to_string();
        let mut builder = openai::CompletionsClient::builder().api_key(&key);
        if let Some(url) = base_url.map(str::to_string) {
            builder = builder.base_url(&url);
        }
        let client = builder.build().map_err(|e| AiError::provider(e.to_string()))?;

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl CompletionProviderTrait for LiveCompletionProvider {
    fn name(&self) -> &'static str {
        LIVE_PROVIDER_NAME
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, AiError> {
        let (prompt, history) = build_history(&request.messages)?;
        debug!(
            "Requesting completion from model {} with {} history messages",
            self.model,
            history.len()
        );

        let agent = self
            .client
            .agent(&self.model)
            .preamble(&request.system_prompt)
            .build();

        agent
            .chat(prompt, history)
            .await
            .map_err(|e| AiError::provider(e.to_string()))
    }

    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, AiError> {
        let (prompt, history) = build_history(&request.messages)?;
        debug!(
            "Streaming completion from model {} with {} history messages",
            self.model,
            history.len()
        );

        let agent = self
            .client
            .agent(&self.model)
            .preamble(&request.system_prompt)
            .build();
        let model = self.model.clone();
        let (tx, rx) = mpsc::channel::<Result<String, AiError>>(STREAM_BUFFER);

        tokio::spawn(async move {
            let mut stream = agent.stream_chat(prompt, history).multi_turn(1).await;
            let mut streamed_text = false;

            while let Some(chunk) = stream.next().await {
                let delta = match chunk {
                    Ok(MultiTurnStreamItem::StreamAssistantItem(
                        StreamedAssistantContent::Text(Text { text }),
                    )) => text,
                    // Some providers only deliver the final payload
                    Ok(MultiTurnStreamItem::FinalResponse(final_response)) if !streamed_text => {
                        final_response.response().to_string()
                    }
                    Ok(_) => continue,
                    Err(e) => {
                        error!("Completion stream from model {} failed: {}", model, e);
                        let _ = tx.send(Err(AiError::provider(e.to_string()))).await;
                        return;
                    }
                };

                if delta.is_empty() {
                    continue;
                }
                streamed_text = true;
                if tx.send(Ok(delta)).await.is_err() {
                    debug!("Completion stream consumer went away");
                    return;
                }
            }
        });

        Ok(ReceiverStream::new(rx).boxed())
    }
}

/// Splits a conversation into the prompt (last user message) and every
/// other turn as rig history, in order.
pub fn build_history(messages: &[ChatMessage]) -> Result<(Message, Vec<Message>), AiError> {
    let last_user_index = last_user_index(messages)?;

    let prompt = Message::User {
        content: OneOrMany::one(UserContent::Text(Text {
            text: messages[last_user_index].content.clone(),
        })),
    };

    let history = messages
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != last_user_index)
        .map(|(_, msg)| match msg.role {
            ChatRole::User => Message::User {
                content: OneOrMany::one(UserContent::Text(Text {
                    text: msg.content.clone(),
                })),
            },
            ChatRole::Assistant => Message::Assistant {
                id: None,
                content: OneOrMany::one(AssistantContent::Text(Text {
                    text: msg.content.clone(),
                })),
            },
        })
        .collect();

    Ok((prompt, history))
}

/// Index of the most recent user message.
pub fn last_user_index(messages: &[ChatMessage]) -> Result<usize, AiError> {
    if messages.is_empty() {
        return Err(AiError::invalid_input("Conversation is empty"));
    }
    messages
        .iter()
        .rposition(ChatMessage::is_user)
        .ok_or_else(|| AiError::invalid_input("A user message is required to start the chat"))
}

// ============================================================================
// Stub Provider
// ============================================================================

const STUB_DIVERSIFICATION_ANSWER: &str = "Your portfolio diversification looks reasonable. \
Consider spreading across more asset classes to reduce risk.";

const STUB_CAPABILITIES_ANSWER: &str = "I can help you analyze your portfolio performance, \
diversification, risk exposure, and rebalancing opportunities.\n\n\
To get personalized advice, ask me about:\n\
- Portfolio diversification\n\
- Risk assessment\n\
- Rebalancing suggestions\n\
- Performance analysis";

const STUB_DISCLAIMER: &str = "*For informational purposes only. Not financial advice.*";

/// Canned answers used when no completion endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubCompletionProvider;

impl StubCompletionProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionProviderTrait for StubCompletionProvider {
    fn name(&self) -> &'static str {
        STUB_PROVIDER_NAME
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, AiError> {
        let valued_at = if request.portfolio_value > Decimal::ZERO {
            format!(" valued at {}", format_currency(request.portfolio_value, false))
        } else {
            String::new()
        };

        let asks_about_diversification = request
            .messages
            .iter()
            .rev()
            .find(|msg| msg.is_user())
            .is_some_and(|msg| msg.content.contains("diversif"));
        let body = if asks_about_diversification {
            STUB_DIVERSIFICATION_ANSWER
        } else {
            STUB_CAPABILITIES_ANSWER
        };

        Ok(format!(
            "Based on your portfolio{}, here's my analysis:\n\n{}\n\n{}",
            valued_at, body, STUB_DISCLAIMER
        ))
    }

    /// Word-by-word deltas of the `complete` answer.
    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, AiError> {
        let reply = self.complete(request).await?;
        let deltas: Vec<Result<String, AiError>> = reply
            .split_inclusive(' ')
            .map(|delta| Ok(delta.to_string()))
            .collect();
        Ok(stream::iter(deltas).boxed())
    }
}
