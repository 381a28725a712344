//! Structured-output wrapping.
//!
//! When a caller asks for structured output, the resolved client is wrapped
//! with the coercion mode its provider family supports: the mode names how
//! the model is instructed to emit schema-conforming JSON and how the
//! response is parsed back out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{LlmClient, Provider};

/// Schema-coercion mode, one per vendor mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuredMode {
    /// Anthropic native JSON mode (direct and Bedrock-hosted Claude).
    AnthropicJson,
    /// Strict tool-calling coercion (OpenAI and Azure OpenAI).
    ToolsStrict,
    /// JSON extracted from a fenced markdown block (DeepSeek).
    MdJson,
    /// Gemini native JSON mode.
    GeminiJson,
    /// Generic JSON mode for OpenAI-compatible gateways.
    Json,
}

impl StructuredMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuredMode::AnthropicJson => "anthropic_json",
            StructuredMode::ToolsStrict => "tools_strict",
            StructuredMode::MdJson => "md_json",
            StructuredMode::GeminiJson => "gemini_json",
            StructuredMode::Json => "json",
        }
    }
}

/// A client whose responses are coerced into a caller-supplied schema.
#[derive(Debug)]
pub struct StructuredClient {
    inner: LlmClient,
    mode: StructuredMode,
    schema: Option<Value>,
}

impl StructuredClient {
    pub fn wrap(inner: LlmClient, mode: StructuredMode) -> Self {
        Self {
            inner,
            mode,
            schema: None,
        }
    }

    /// Attach the JSON Schema responses must validate against.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn mode(&self) -> StructuredMode {
        self.mode
    }

    pub fn client(&self) -> &LlmClient {
        &self.inner
    }

    pub fn schema(&self) -> Option<&Value> {
        self.schema.as_ref()
    }

    pub fn into_inner(self) -> LlmClient {
        self.inner
    }
}

/// Outcome of resolution: the vendor client as-is, or wrapped for structured
/// output.
#[derive(Debug)]
pub enum ResolvedClient {
    Direct(LlmClient),
    Structured(StructuredClient),
}

impl ResolvedClient {
    pub fn client(&self) -> &LlmClient {
        match self {
            ResolvedClient::Direct(client) => client,
            ResolvedClient::Structured(wrapped) => wrapped.client(),
        }
    }

    pub fn provider(&self) -> Provider {
        self.client().provider()
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ResolvedClient::Structured(_))
    }

    /// Active coercion mode, if the client was wrapped.
    pub fn structured_mode(&self) -> Option<StructuredMode> {
        match self {
            ResolvedClient::Direct(_) => None,
            ResolvedClient::Structured(wrapped) => Some(wrapped.mode()),
        }
    }
}
