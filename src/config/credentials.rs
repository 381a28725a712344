//! Credential and endpoint configuration for the client resolver.
//!
//! Every environment-sourced value the resolver consumes is snapshotted into
//! a [`ResolverCredentials`] once, by the host, from whatever source it
//! prefers (process environment, `.env` file, secret manager). The resolver
//! never reads the environment behind the caller's back, so tests can build
//! the struct directly without touching process state.

use anyhow::Result;
use std::env;

use super::constants::{defaults, env_vars};

/// Snapshot of the credentials and endpoints the resolver draws on.
///
/// All fields are optional; which of them a given resolution actually needs
/// depends on the rule the model name matches. `None` and empty-string values
/// are treated the same way.
#[derive(Debug, Clone, Default)]
pub struct ResolverCredentials {
    /// Ambient key for the direct Anthropic API.
    pub anthropic_api_key: Option<String>,
    /// Ambient key for the direct OpenAI API.
    pub openai_api_key: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_region: Option<String>,
    pub azure_api_key: Option<String>,
    /// Azure deployment endpoint, e.g. `https://my-deployment.openai.azure.com/`.
    pub azure_endpoint: Option<String>,
    pub deepseek_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    /// Referer-style attribution sent to OpenRouter.
    pub site_url: Option<String>,
    /// Title-style attribution sent to OpenRouter.
    pub app_name: Option<String>,
}

impl ResolverCredentials {
    /// Snapshot the process environment.
    ///
    /// Call [`load_dotenv`] first if `.env` file values should take part.
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: read(env_vars::ANTHROPIC_API_KEY),
            openai_api_key: read(env_vars::OPENAI_API_KEY),
            aws_access_key_id: read(env_vars::AWS_ACCESS_KEY_ID),
            aws_secret_access_key: read(env_vars::AWS_SECRET_ACCESS_KEY),
            aws_region: read(env_vars::AWS_REGION_NAME),
            azure_api_key: read(env_vars::AZURE_OPENAI_API_KEY),
            azure_endpoint: read(env_vars::AZURE_API_ENDPOINT),
            deepseek_api_key: read(env_vars::DEEPSEEK_API_KEY),
            gemini_api_key: read(env_vars::GEMINI_API_KEY),
            openrouter_api_key: read(env_vars::OPENROUTER_API_KEY),
            site_url: read(env_vars::SHINKA_SITE_URL),
            app_name: read(env_vars::SHINKA_APP_NAME),
        }
    }

    /// Attribution referer, falling back to the project URL.
    pub fn site_url_or_default(&self) -> &str {
        non_empty(&self.site_url).unwrap_or(defaults::SITE_URL)
    }

    /// Attribution title, falling back to the project name.
    pub fn app_name_or_default(&self) -> &str {
        non_empty(&self.app_name).unwrap_or(defaults::APP_NAME)
    }
}

fn read(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Load environment variables from a `.env` file in the current directory or
/// any parent, with file values overriding already-set variables.
///
/// A missing file is fine; a malformed one is reported but not fatal.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv_override() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load .env file");
            Ok(())
        }
    }
}
