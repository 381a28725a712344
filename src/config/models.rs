//! Static model registries with pricing metadata.
//!
//! One table per provider family, built at compile time and never mutated.
//! Membership in these tables is what drives routing; the pricing side is
//! used for spend accounting. Bedrock ids carry their `bedrock/` routing
//! prefix here because that is the form callers pass in.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Published list price in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
}

const fn price(input_per_mtok: f64, output_per_mtok: f64) -> ModelPricing {
    ModelPricing {
        input_per_mtok,
        output_per_mtok,
    }
}

/// Anthropic models served from the direct API.
pub const CLAUDE_MODELS: &[(&str, ModelPricing)] = &[
    ("claude-3-5-haiku-20241022", price(0.80, 4.00)),
    ("claude-3-5-sonnet-20241022", price(3.00, 15.00)),
    ("claude-3-7-sonnet-20250219", price(3.00, 15.00)),
    ("claude-sonnet-4-20250514", price(3.00, 15.00)),
    ("claude-opus-4-20250514", price(15.00, 75.00)),
    ("claude-opus-4-1-20250805", price(15.00, 75.00)),
];

/// Anthropic models re-exposed through Amazon Bedrock.
pub const BEDROCK_MODELS: &[(&str, ModelPricing)] = &[
    (
        "bedrock/anthropic.claude-3-5-sonnet-20241022-v2:0",
        price(3.00, 15.00),
    ),
    (
        "bedrock/anthropic.claude-3-7-sonnet-20250219-v1:0",
        price(3.00, 15.00),
    ),
    (
        "bedrock/us.anthropic.claude-sonnet-4-20250514-v1:0",
        price(3.00, 15.00),
    ),
    (
        "bedrock/us.anthropic.claude-opus-4-20250514-v1:0",
        price(15.00, 75.00),
    ),
];

pub const OPENAI_MODELS: &[(&str, ModelPricing)] = &[
    ("gpt-4o", price(2.50, 10.00)),
    ("gpt-4o-mini", price(0.15, 0.60)),
    ("gpt-4.1", price(2.00, 8.00)),
    ("gpt-4.1-mini", price(0.40, 1.60)),
    ("gpt-4.1-nano", price(0.10, 0.40)),
    ("o3", price(2.00, 8.00)),
    ("o3-mini", price(1.10, 4.40)),
    ("o4-mini", price(1.10, 4.40)),
    ("gpt-5", price(1.25, 10.00)),
    ("gpt-5-mini", price(0.25, 2.00)),
];

pub const DEEPSEEK_MODELS: &[(&str, ModelPricing)] = &[
    ("deepseek-chat", price(0.27, 1.10)),
    ("deepseek-reasoner", price(0.55, 2.19)),
];

pub const GEMINI_MODELS: &[(&str, ModelPricing)] = &[
    ("gemini-2.0-flash", price(0.10, 0.40)),
    ("gemini-2.5-flash", price(0.30, 2.50)),
    ("gemini-2.5-pro", price(1.25, 10.00)),
];

static PRICING_INDEX: Lazy<HashMap<&'static str, ModelPricing>> = Lazy::new(|| {
    let tables = [
        CLAUDE_MODELS,
        BEDROCK_MODELS,
        OPENAI_MODELS,
        DEEPSEEK_MODELS,
        GEMINI_MODELS,
    ];
    tables
        .into_iter()
        .flatten()
        .map(|(name, pricing)| (*name, *pricing))
        .collect()
});

fn table_contains(table: &[(&str, ModelPricing)], model: &str) -> bool {
    table.iter().any(|(name, _)| *name == model)
}

pub fn is_claude_model(model: &str) -> bool {
    table_contains(CLAUDE_MODELS, model)
}

pub fn is_bedrock_model(model: &str) -> bool {
    table_contains(BEDROCK_MODELS, model)
}

pub fn is_openai_model(model: &str) -> bool {
    table_contains(OPENAI_MODELS, model)
}

pub fn is_deepseek_model(model: &str) -> bool {
    table_contains(DEEPSEEK_MODELS, model)
}

pub fn is_gemini_model(model: &str) -> bool {
    table_contains(GEMINI_MODELS, model)
}

/// Pricing for a model in any of the registries.
pub fn pricing_for(model: &str) -> Option<ModelPricing> {
    PRICING_INDEX.get(model).copied()
}

/// Every model name the registries know about.
pub fn known_models() -> impl Iterator<Item = &'static str> {
    PRICING_INDEX.keys().copied()
}
