//! Advisor service: portfolio-aware answers to a user conversation.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use portifi_core::holdings::HoldingsServiceTrait;
use portifi_core::portfolio::valuation::total_portfolio_value;

use crate::completion::{
    last_user_index, CompletionProviderTrait, CompletionRequest, CompletionStream,
};
use crate::config::AdvisorConfig;
use crate::context::{build_portfolio_context, build_system_prompt};
use crate::error::AiError;
use crate::types::{AdvisorReply, ChatMessage};

/// Trait for advisor service operations.
#[async_trait]
pub trait AdvisorServiceTrait: Send + Sync {
    /// Answers the latest user message of `messages`, grounded in the
    /// user's current holdings.
    async fn respond(&self, user_id: &str, messages: Vec<ChatMessage>)
        -> Result<AdvisorReply, AiError>;

    /// Same as `respond`, delivering the answer as text deltas.
    async fn respond_stream(
        &self,
        user_id: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<AdvisorStream, AiError>;
}

/// A streamed advisor answer.
pub struct AdvisorStream {
    /// Name of the completion strategy producing the deltas
    pub provider: String,
    pub deltas: CompletionStream,
}

pub struct AdvisorService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    provider: Arc<dyn CompletionProviderTrait>,
    config: AdvisorConfig,
}

impl AdvisorService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        provider: Arc<dyn CompletionProviderTrait>,
        config: AdvisorConfig,
    ) -> Self {
        Self {
            holdings_service,
            provider,
            config,
        }
    }

    async fn build_request(
        &self,
        user_id: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<CompletionRequest, AiError> {
        // Reject malformed conversations before touching storage
        last_user_index(&messages)?;

        let holdings = self.holdings_service.get_enriched_holdings(user_id).await?;
        let portfolio_value = total_portfolio_value(&holdings);
        let context = build_portfolio_context(&holdings);
        debug!(
            "Advisor context for user {}: {} holdings, {} messages",
            user_id,
            holdings.len(),
            messages.len()
        );

        Ok(CompletionRequest {
            system_prompt: build_system_prompt(&self.config.assistant_name, &context),
            messages,
            portfolio_value,
        })
    }
}

#[async_trait]
impl AdvisorServiceTrait for AdvisorService {
    async fn respond(
        &self,
        user_id: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<AdvisorReply, AiError> {
        let request = self.build_request(user_id, messages).await?;

        let content = self.provider.complete(&request).await.map_err(|e| {
            error!("Advisor completion failed ({}): {}", e.code(), e);
            e
        })?;

        Ok(AdvisorReply {
            content,
            provider: self.provider.name().to_string(),
        })
    }

    async fn respond_stream(
        &self,
        user_id: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<AdvisorStream, AiError> {
        let request = self.build_request(user_id, messages).await?;

        let deltas = self.provider.stream(&request).await.map_err(|e| {
            error!("Advisor stream failed to start ({}): {}", e.code(), e);
            e
        })?;

        Ok(AdvisorStream {
            provider: self.provider.name().to_string(),
            deltas,
        })
    }
}
