//! # shinka-llm
//!
//! Model-name to provider-client resolution for multi-provider LLM pipelines.
//!
//! Given a model name such as `claude-sonnet-4-20250514`, `azure-gpt-4o`, or
//! `qwen/qwen3-coder`, [`ClientResolver`] decides which provider family the
//! name belongs to and returns a configured client for that family's hosted
//! API, plus the normalized model name to use in subsequent calls (prefixes
//! like `azure-` and `bedrock/` are stripped during resolution).
//!
//! Routing walks a fixed precedence list ([`Route::ORDER`]): the Anthropic,
//! Bedrock, OpenAI, DeepSeek, and Gemini registries are checked first, then
//! the `azure-` literal prefix, and finally any `/`-separated name falls
//! through to the OpenRouter gateway. The first matching rule wins.
//!
//! Credentials are snapshotted into an explicit [`ResolverCredentials`]
//! value; resolution itself performs no I/O and is safe to call from any
//! number of threads.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use shinka_llm::{ClientResolver, load_dotenv};
//!
//! fn main() -> anyhow::Result<()> {
//!     load_dotenv()?;
//!     let resolver = ClientResolver::from_env();
//!
//!     // Direct Anthropic client, no structured output.
//!     let (client, model) = resolver.resolve("claude-sonnet-4-20250514", false)?;
//!     println!("{} -> {}", client.provider().as_str(), model);
//!
//!     // Gateway client with schema-coerced responses.
//!     let (client, model) = resolver.resolve("qwen/qwen3-coder", true)?;
//!     assert!(client.is_structured());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod llm;

pub use config::credentials::{ResolverCredentials, load_dotenv};
pub use config::models::ModelPricing;
pub use llm::client::{
    AnthropicBedrockClient, AnthropicClient, LlmClient, OpenAiCompatClient, Provider,
};
pub use llm::factory::{ClientResolver, ResolveError, Route, route_model};
pub use llm::structured::{ResolvedClient, StructuredClient, StructuredMode};
