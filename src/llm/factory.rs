//! Model-name to client resolution.
//!
//! A model name is classified by the first rule in [`Route::ORDER`] that
//! matches it; the order is load-bearing. Registry rules come before the
//! `azure-` prefix rule, and the OpenRouter fallback claims any remaining
//! `/`-separated name that is not a `bedrock/` id.

use tracing::debug;

use super::client::{
    AnthropicBedrockClient, AnthropicClient, LlmClient, OpenAiCompatClient, Provider,
};
use super::structured::{ResolvedClient, StructuredClient, StructuredMode};
use crate::config::constants::{env_vars, headers, routing, urls};
use crate::config::credentials::ResolverCredentials;
use crate::config::models;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("model {0} not supported")]
    UnsupportedModel(String),
    #[error("model '{model}' requires {var} to be set in the environment")]
    MissingCredential { model: String, var: &'static str },
}

/// Routing rule, one per provider family, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AnthropicDirect,
    Bedrock,
    OpenAiDirect,
    AzureOpenAi,
    DeepSeek,
    Gemini,
    OpenRouter,
}

impl Route {
    /// Precedence list; the first matching entry wins.
    pub const ORDER: &'static [Route] = &[
        Route::AnthropicDirect,
        Route::Bedrock,
        Route::OpenAiDirect,
        Route::AzureOpenAi,
        Route::DeepSeek,
        Route::Gemini,
        Route::OpenRouter,
    ];

    /// Whether this rule claims the given model name.
    pub fn matches(&self, model_name: &str) -> bool {
        match self {
            Route::AnthropicDirect => models::is_claude_model(model_name),
            Route::Bedrock => models::is_bedrock_model(model_name),
            Route::OpenAiDirect => models::is_openai_model(model_name),
            Route::AzureOpenAi => model_name.starts_with(routing::AZURE_MODEL_PREFIX),
            Route::DeepSeek => models::is_deepseek_model(model_name),
            Route::Gemini => models::is_gemini_model(model_name),
            Route::OpenRouter => {
                model_name.contains('/')
                    && !model_name.starts_with(routing::BEDROCK_MODEL_PREFIX)
            }
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            Route::AnthropicDirect => Provider::Anthropic,
            Route::Bedrock => Provider::Bedrock,
            Route::OpenAiDirect => Provider::OpenAi,
            Route::AzureOpenAi => Provider::Azure,
            Route::DeepSeek => Provider::DeepSeek,
            Route::Gemini => Provider::Gemini,
            Route::OpenRouter => Provider::OpenRouter,
        }
    }
}

/// Classify a model name against [`Route::ORDER`].
pub fn route_model(model_name: &str) -> Option<Route> {
    Route::ORDER
        .iter()
        .copied()
        .find(|rule| rule.matches(model_name))
}

/// Maps model names to configured provider clients.
///
/// Resolution is a pure function of the model name, the structured-output
/// flag, and the credentials snapshot; no I/O happens until the caller uses
/// the returned client.
pub struct ClientResolver {
    credentials: ResolverCredentials,
}

impl ClientResolver {
    pub fn new(credentials: ResolverCredentials) -> Self {
        Self { credentials }
    }

    /// Resolver over a snapshot of the current process environment.
    pub fn from_env() -> Self {
        Self::new(ResolverCredentials::from_env())
    }

    pub fn credentials(&self) -> &ResolverCredentials {
        &self.credentials
    }

    /// Resolve `model_name` to a configured client plus the normalized model
    /// name to use in subsequent API calls.
    ///
    /// When a rule strips a prefix (`bedrock/...`, `azure-...`), the returned
    /// name, not the input, is the one the provider API understands.
    pub fn resolve(
        &self,
        model_name: &str,
        structured_output: bool,
    ) -> Result<(ResolvedClient, String), ResolveError> {
        let route = route_model(model_name)
            .ok_or_else(|| ResolveError::UnsupportedModel(model_name.to_string()))?;

        let (client, normalized, mode) = match route {
            Route::AnthropicDirect => (
                LlmClient::Anthropic(AnthropicClient::new(
                    self.credentials.anthropic_api_key.clone(),
                )),
                model_name.to_string(),
                StructuredMode::AnthropicJson,
            ),
            Route::Bedrock => {
                // Bedrock ids keep only the segment after the last '/'.
                let normalized = model_name
                    .rsplit('/')
                    .next()
                    .unwrap_or(model_name)
                    .to_string();
                (
                    LlmClient::Bedrock(AnthropicBedrockClient::new(
                        self.credentials.aws_access_key_id.clone(),
                        self.credentials.aws_secret_access_key.clone(),
                        self.credentials.aws_region.clone(),
                    )),
                    normalized,
                    StructuredMode::AnthropicJson,
                )
            }
            Route::OpenAiDirect => (
                LlmClient::OpenAiCompatible(OpenAiCompatClient::new(
                    Provider::OpenAi,
                    self.credentials.openai_api_key.clone(),
                    urls::OPENAI_API_BASE,
                )),
                model_name.to_string(),
                StructuredMode::ToolsStrict,
            ),
            Route::AzureOpenAi => {
                let normalized = model_name
                    .strip_prefix(routing::AZURE_MODEL_PREFIX)
                    .unwrap_or(model_name)
                    .to_string();
                let api_key = require(
                    &self.credentials.azure_api_key,
                    env_vars::AZURE_OPENAI_API_KEY,
                    model_name,
                )?;
                let endpoint = require(
                    &self.credentials.azure_endpoint,
                    env_vars::AZURE_API_ENDPOINT,
                    model_name,
                )?;
                (
                    LlmClient::OpenAiCompatible(OpenAiCompatClient::new(
                        Provider::Azure,
                        Some(api_key),
                        format!("{}{}", endpoint, urls::AZURE_OPENAI_PATH),
                    )),
                    normalized,
                    StructuredMode::ToolsStrict,
                )
            }
            Route::DeepSeek => {
                let api_key = require(
                    &self.credentials.deepseek_api_key,
                    env_vars::DEEPSEEK_API_KEY,
                    model_name,
                )?;
                (
                    LlmClient::OpenAiCompatible(OpenAiCompatClient::new(
                        Provider::DeepSeek,
                        Some(api_key),
                        urls::DEEPSEEK_API_BASE,
                    )),
                    model_name.to_string(),
                    StructuredMode::MdJson,
                )
            }
            Route::Gemini => {
                let api_key = require(
                    &self.credentials.gemini_api_key,
                    env_vars::GEMINI_API_KEY,
                    model_name,
                )?;
                (
                    LlmClient::OpenAiCompatible(OpenAiCompatClient::new(
                        Provider::Gemini,
                        Some(api_key),
                        urls::GEMINI_OPENAI_COMPAT_BASE,
                    )),
                    model_name.to_string(),
                    StructuredMode::GeminiJson,
                )
            }
            Route::OpenRouter => {
                let api_key = require(
                    &self.credentials.openrouter_api_key,
                    env_vars::OPENROUTER_API_KEY,
                    model_name,
                )?;
                let attribution = vec![
                    (
                        headers::HTTP_REFERER.to_string(),
                        self.credentials.site_url_or_default().to_string(),
                    ),
                    (
                        headers::X_TITLE.to_string(),
                        self.credentials.app_name_or_default().to_string(),
                    ),
                ];
                (
                    LlmClient::OpenAiCompatible(
                        OpenAiCompatClient::new(
                            Provider::OpenRouter,
                            Some(api_key),
                            urls::OPENROUTER_API_BASE,
                        )
                        .with_headers(attribution),
                    ),
                    model_name.to_string(),
                    StructuredMode::Json,
                )
            }
        };

        debug!(
            provider = client.provider().as_str(),
            model = %normalized,
            structured = structured_output,
            "resolved llm client"
        );

        let resolved = if structured_output {
            ResolvedClient::Structured(StructuredClient::wrap(client, mode))
        } else {
            ResolvedClient::Direct(client)
        };
        Ok((resolved, normalized))
    }
}

fn require(
    value: &Option<String>,
    var: &'static str,
    model: &str,
) -> Result<String, ResolveError> {
    value
        .clone()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ResolveError::MissingCredential {
            model: model.to_string(),
            var,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_credentials() -> ResolverCredentials {
        ResolverCredentials {
            anthropic_api_key: Some("anthropic-key".to_string()),
            openai_api_key: Some("openai-key".to_string()),
            aws_access_key_id: Some("aws-id".to_string()),
            aws_secret_access_key: Some("aws-secret".to_string()),
            aws_region: Some("us-west-2".to_string()),
            azure_api_key: Some("azure-key".to_string()),
            azure_endpoint: Some("https://my-deployment.openai.azure.com/".to_string()),
            deepseek_api_key: Some("deepseek-key".to_string()),
            gemini_api_key: Some("gemini-key".to_string()),
            openrouter_api_key: Some("openrouter-key".to_string()),
            site_url: None,
            app_name: None,
        }
    }

    fn resolver() -> ClientResolver {
        ClientResolver::new(full_credentials())
    }

    #[test]
    fn order_lists_every_rule_exactly_once() {
        assert_eq!(
            Route::ORDER,
            &[
                Route::AnthropicDirect,
                Route::Bedrock,
                Route::OpenAiDirect,
                Route::AzureOpenAi,
                Route::DeepSeek,
                Route::Gemini,
                Route::OpenRouter,
            ]
        );
    }

    #[test]
    fn registry_models_route_to_their_family() {
        assert_eq!(
            route_model("claude-sonnet-4-20250514"),
            Some(Route::AnthropicDirect)
        );
        assert_eq!(route_model("gpt-4o"), Some(Route::OpenAiDirect));
        assert_eq!(route_model("deepseek-chat"), Some(Route::DeepSeek));
        assert_eq!(route_model("gemini-2.5-pro"), Some(Route::Gemini));
    }

    #[test]
    fn bedrock_registry_wins_over_gateway_fallback() {
        // Contains '/', but the registry rule comes first.
        assert_eq!(
            route_model("bedrock/anthropic.claude-3-7-sonnet-20250219-v1:0"),
            Some(Route::Bedrock)
        );
    }

    #[test]
    fn unknown_bedrock_id_is_not_a_gateway_model() {
        // Not in the registry, but still excluded from the OpenRouter rule.
        assert_eq!(route_model("bedrock/anthropic.claude-99"), None);
        let err = resolver()
            .resolve("bedrock/anthropic.claude-99", false)
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedModel(_)));
    }

    #[test]
    fn claude_resolves_to_direct_anthropic_client() {
        let (client, model) = resolver()
            .resolve("claude-sonnet-4-20250514", false)
            .unwrap();
        assert_eq!(client.provider(), Provider::Anthropic);
        assert_eq!(model, "claude-sonnet-4-20250514");
        assert!(!client.is_structured());

        let LlmClient::Anthropic(inner) = client.client() else {
            panic!("expected anthropic client");
        };
        assert_eq!(inner.api_key(), Some("anthropic-key"));
        assert_eq!(inner.base_url(), urls::ANTHROPIC_API_BASE);
    }

    #[test]
    fn claude_structured_uses_anthropic_json_mode() {
        let (client, _) = resolver()
            .resolve("claude-sonnet-4-20250514", true)
            .unwrap();
        assert_eq!(
            client.structured_mode(),
            Some(StructuredMode::AnthropicJson)
        );
    }

    #[test]
    fn bedrock_strips_to_the_last_path_segment() {
        let (client, model) = resolver()
            .resolve("bedrock/anthropic.claude-3-7-sonnet-20250219-v1:0", false)
            .unwrap();
        assert_eq!(client.provider(), Provider::Bedrock);
        assert_eq!(model, "anthropic.claude-3-7-sonnet-20250219-v1:0");

        let LlmClient::Bedrock(inner) = client.client() else {
            panic!("expected bedrock client");
        };
        assert_eq!(inner.aws_access_key_id(), Some("aws-id"));
        assert_eq!(inner.aws_secret_access_key(), Some("aws-secret"));
        assert_eq!(inner.aws_region(), "us-west-2");
    }

    #[test]
    fn bedrock_structured_shares_the_anthropic_mode() {
        let (client, _) = resolver()
            .resolve("bedrock/us.anthropic.claude-sonnet-4-20250514-v1:0", true)
            .unwrap();
        assert_eq!(
            client.structured_mode(),
            Some(StructuredMode::AnthropicJson)
        );
    }

    #[test]
    fn openai_resolves_without_prefix_stripping() {
        let (client, model) = resolver().resolve("gpt-4o", true).unwrap();
        assert_eq!(client.provider(), Provider::OpenAi);
        assert_eq!(model, "gpt-4o");
        assert_eq!(client.structured_mode(), Some(StructuredMode::ToolsStrict));
    }

    #[test]
    fn azure_prefix_is_stripped_and_endpoint_composed() {
        let (client, model) = resolver().resolve("azure-gpt-4o", false).unwrap();
        assert_eq!(client.provider(), Provider::Azure);
        assert_eq!(model, "gpt-4o");

        let LlmClient::OpenAiCompatible(inner) = client.client() else {
            panic!("expected openai-compatible client");
        };
        assert_eq!(inner.api_key(), Some("azure-key"));
        assert_eq!(
            inner.base_url(),
            "https://my-deployment.openai.azure.com/openai/v1/"
        );
    }

    #[test]
    fn azure_without_key_is_a_missing_credential() {
        let creds = ResolverCredentials {
            azure_api_key: None,
            ..full_credentials()
        };
        let err = ClientResolver::new(creds)
            .resolve("azure-gpt-4o", false)
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingCredential {
                var: env_vars::AZURE_OPENAI_API_KEY,
                ..
            }
        ));
    }

    #[test]
    fn azure_without_endpoint_is_a_missing_credential() {
        let creds = ResolverCredentials {
            azure_endpoint: None,
            ..full_credentials()
        };
        let err = ClientResolver::new(creds)
            .resolve("azure-gpt-4o", false)
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingCredential {
                var: env_vars::AZURE_API_ENDPOINT,
                ..
            }
        ));
    }

    #[test]
    fn deepseek_uses_md_json_mode() {
        let (client, model) = resolver().resolve("deepseek-reasoner", true).unwrap();
        assert_eq!(client.provider(), Provider::DeepSeek);
        assert_eq!(model, "deepseek-reasoner");
        assert_eq!(client.structured_mode(), Some(StructuredMode::MdJson));

        let LlmClient::OpenAiCompatible(inner) = client.client() else {
            panic!("expected openai-compatible client");
        };
        assert_eq!(inner.base_url(), urls::DEEPSEEK_API_BASE);
    }

    #[test]
    fn gemini_uses_its_native_json_mode() {
        let (client, _) = resolver().resolve("gemini-2.5-pro", true).unwrap();
        assert_eq!(client.provider(), Provider::Gemini);
        assert_eq!(client.structured_mode(), Some(StructuredMode::GeminiJson));

        let LlmClient::OpenAiCompatible(inner) = client.client() else {
            panic!("expected openai-compatible client");
        };
        assert_eq!(inner.base_url(), urls::GEMINI_OPENAI_COMPAT_BASE);
    }

    #[test]
    fn gateway_model_keeps_its_name_and_attribution_headers() {
        let (client, model) = resolver().resolve("qwen/qwen3-coder", true).unwrap();
        assert_eq!(client.provider(), Provider::OpenRouter);
        assert_eq!(model, "qwen/qwen3-coder");
        assert_eq!(client.structured_mode(), Some(StructuredMode::Json));

        let LlmClient::OpenAiCompatible(inner) = client.client() else {
            panic!("expected openai-compatible client");
        };
        assert_eq!(inner.base_url(), urls::OPENROUTER_API_BASE);
        assert_eq!(
            inner.default_headers(),
            &[
                (
                    headers::HTTP_REFERER.to_string(),
                    "https://github.com/SakanaAI/ShinkaEvolve".to_string()
                ),
                (headers::X_TITLE.to_string(), "ShinkaEvolve".to_string()),
            ]
        );
    }

    #[test]
    fn gateway_attribution_respects_overrides() {
        let creds = ResolverCredentials {
            site_url: Some("https://example.com".to_string()),
            app_name: Some("my-app".to_string()),
            ..full_credentials()
        };
        let (client, _) = ClientResolver::new(creds)
            .resolve("qwen/qwen3-coder", false)
            .unwrap();
        let LlmClient::OpenAiCompatible(inner) = client.client() else {
            panic!("expected openai-compatible client");
        };
        assert_eq!(inner.default_headers()[0].1, "https://example.com");
        assert_eq!(inner.default_headers()[1].1, "my-app");
    }

    #[test]
    fn gateway_without_key_names_the_model() {
        let creds = ResolverCredentials {
            openrouter_api_key: None,
            ..full_credentials()
        };
        let err = ClientResolver::new(creds)
            .resolve("some-org/some-model", false)
            .unwrap_err();
        match &err {
            ResolveError::MissingCredential { model, var } => {
                assert_eq!(model, "some-org/some-model");
                assert_eq!(*var, env_vars::OPENROUTER_API_KEY);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("some-org/some-model"));
    }

    #[test]
    fn unknown_model_is_unsupported() {
        let err = resolver()
            .resolve("totally-unknown-model", false)
            .unwrap_err();
        match err {
            ResolveError::UnsupportedModel(model) => {
                assert_eq!(model, "totally-unknown-model");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ambient_rules_construct_without_credentials() {
        // Anthropic, Bedrock, and OpenAI defer auth failure to request time.
        let resolver = ClientResolver::new(ResolverCredentials::default());
        assert!(resolver.resolve("claude-sonnet-4-20250514", false).is_ok());
        assert!(
            resolver
                .resolve("bedrock/anthropic.claude-3-7-sonnet-20250219-v1:0", false)
                .is_ok()
        );
        assert!(resolver.resolve("gpt-4o", false).is_ok());
    }
}
