//! PortiFi AI - portfolio advisor using rig-core.
//!
//! This crate answers user questions about their portfolio. Each request
//! summarizes the user's holdings into a system prompt and hands the
//! conversation to a completion strategy chosen once at startup.
//!
//! # Architecture
//!
//! - `advisor`: Advisor service (holdings -> prompt -> completion)
//! - `completion`: Completion strategy trait (buffered and streaming) with live
//!   (rig-core) and stub implementations
//! - `config`: Advisor configuration and strategy selection
//! - `context`: Portfolio context block and system prompt
//! - `types`: Conversation DTOs shared with API consumers
//!
//! # Example
//!
//! ```ignore
//! use portifi_ai::{build_completion_provider, AdvisorConfig, AdvisorService, AdvisorServiceTrait};
//!
//! let config = AdvisorConfig::from_env();
//! let provider = build_completion_provider(&config)?;
//! let advisor = AdvisorService::new(holdings_service, provider, config);
//!
//! let reply = advisor
//!     .respond(&user_id, vec![ChatMessage::user("How diversified am I?")])
//!     .await?;
//! println!("{}", reply.content);
//! ```

pub mod advisor;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use advisor::{AdvisorService, AdvisorServiceTrait, AdvisorStream};
pub use completion::{
    CompletionProviderTrait, CompletionRequest, CompletionStream, LiveCompletionProvider,
    StubCompletionProvider,
};
pub use config::{build_completion_provider, AdvisorConfig};
pub use context::{build_portfolio_context, build_system_prompt};
pub use error::AiError;
pub use types::{AdvisorReply, ChatMessage, ChatRole};
