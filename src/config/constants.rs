/// Environment variable names consumed by the resolver and its clients.
pub mod env_vars {
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
    pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
    pub const AWS_REGION_NAME: &str = "AWS_REGION_NAME";
    pub const AZURE_OPENAI_API_KEY: &str = "AZURE_OPENAI_API_KEY";
    pub const AZURE_API_ENDPOINT: &str = "AZURE_API_ENDPOINT";
    pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
    pub const SHINKA_SITE_URL: &str = "SHINKA_SITE_URL";
    pub const SHINKA_APP_NAME: &str = "SHINKA_APP_NAME";
}

/// URL constants for API endpoints.
pub mod urls {
    pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
    pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
    pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";
    pub const GEMINI_OPENAI_COMPAT_BASE: &str =
        "https://generativelanguage.googleapis.com/v1beta/openai/";
    pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

    /// Path appended to the `AZURE_API_ENDPOINT` value to reach the
    /// OpenAI-compatible surface of an Azure deployment.
    pub const AZURE_OPENAI_PATH: &str = "openai/v1/";
}

/// Literal model-name prefixes the routing rules key on.
pub mod routing {
    pub const AZURE_MODEL_PREFIX: &str = "azure-";
    pub const BEDROCK_MODEL_PREFIX: &str = "bedrock/";
}

/// Attribution headers sent to the OpenRouter gateway.
pub mod headers {
    pub const HTTP_REFERER: &str = "HTTP-Referer";
    pub const X_TITLE: &str = "X-Title";
}

/// Default configuration values.
pub mod defaults {
    pub const SITE_URL: &str = "https://github.com/SakanaAI/ShinkaEvolve";
    pub const APP_NAME: &str = "ShinkaEvolve";
    pub const AWS_REGION: &str = "us-east-1";
}
