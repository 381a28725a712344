//! Provider client types.
//!
//! Each variant carries exactly the constructor parameters its API needs;
//! none of them perform I/O at construction time. The Anthropic direct and
//! Bedrock shapes are distinct types, while every OpenAI-compatible surface
//! (OpenAI, Azure, DeepSeek, Gemini compat, OpenRouter) shares one client
//! shape parameterized by base URL, key, and default headers.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::config::constants::{defaults, urls};

/// Provider family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Anthropic,
    Bedrock,
    OpenAi,
    Azure,
    DeepSeek,
    Gemini,
    OpenRouter,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::Bedrock => "bedrock",
            Provider::OpenAi => "openai",
            Provider::Azure => "azure",
            Provider::DeepSeek => "deepseek",
            Provider::Gemini => "gemini",
            Provider::OpenRouter => "openrouter",
        }
    }
}

/// Direct Anthropic API client.
#[derive(Debug)]
pub struct AnthropicClient {
    api_key: Option<String>,
    http_client: HttpClient,
    base_url: String,
    api_version: &'static str,
}

impl AnthropicClient {
    /// The key is ambient: an absent key still constructs, and the API
    /// rejects the first request instead.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: urls::ANTHROPIC_API_BASE.to_string(),
            api_version: urls::ANTHROPIC_API_VERSION,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        self.api_version
    }

    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }
}

/// Anthropic models hosted on Amazon Bedrock.
#[derive(Debug)]
pub struct AnthropicBedrockClient {
    aws_access_key_id: Option<String>,
    aws_secret_access_key: Option<String>,
    aws_region: String,
    http_client: HttpClient,
}

impl AnthropicBedrockClient {
    pub fn new(
        aws_access_key_id: Option<String>,
        aws_secret_access_key: Option<String>,
        aws_region: Option<String>,
    ) -> Self {
        Self {
            aws_access_key_id,
            aws_secret_access_key,
            aws_region: aws_region.unwrap_or_else(|| defaults::AWS_REGION.to_string()),
            http_client: HttpClient::new(),
        }
    }

    pub fn aws_access_key_id(&self) -> Option<&str> {
        self.aws_access_key_id.as_deref()
    }

    pub fn aws_secret_access_key(&self) -> Option<&str> {
        self.aws_secret_access_key.as_deref()
    }

    pub fn aws_region(&self) -> &str {
        &self.aws_region
    }

    /// Regional Bedrock runtime endpoint.
    pub fn endpoint(&self) -> String {
        format!("https://bedrock-runtime.{}.amazonaws.com", self.aws_region)
    }

    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }
}

/// Client for any OpenAI-compatible API surface.
#[derive(Debug)]
pub struct OpenAiCompatClient {
    provider: Provider,
    api_key: Option<String>,
    base_url: String,
    default_headers: Vec<(String, String)>,
    http_client: HttpClient,
}

impl OpenAiCompatClient {
    pub fn new(provider: Provider, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            provider,
            api_key,
            base_url: base_url.into(),
            default_headers: Vec::new(),
            http_client: HttpClient::new(),
        }
    }

    /// Headers attached to every request, e.g. OpenRouter attribution.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }
}

/// A configured client for exactly one provider family.
#[derive(Debug)]
pub enum LlmClient {
    Anthropic(AnthropicClient),
    Bedrock(AnthropicBedrockClient),
    OpenAiCompatible(OpenAiCompatClient),
}

impl LlmClient {
    pub fn provider(&self) -> Provider {
        match self {
            LlmClient::Anthropic(_) => Provider::Anthropic,
            LlmClient::Bedrock(_) => Provider::Bedrock,
            LlmClient::OpenAiCompatible(client) => client.provider(),
        }
    }
}
