//! Enriched model catalog types.
//!
//! `ModelRecord` is the shape served to the frontend: the upstream catalog
//! record plus derived fields (provider, creation date, `is_free`,
//! categories). Records are recomputed on every catalog fetch and never
//! persisted.

use serde::{Deserialize, Serialize};

/// An enriched model catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub context_length: Option<u64>,
    /// Derived from the id prefix before `/`, or `"unknown"`.
    pub provider: String,
    /// `YYYY-MM-DD`, or `"Unknown"` when the upstream timestamp is absent.
    pub created_date: String,
    pub hugging_face_id: String,
    pub canonical_slug: String,
    pub pricing: PriceInfo,
    /// Derived category tags, sorted and deduplicated.
    pub categories: Vec<String>,
    pub architecture: ArchitectureInfo,
    pub capabilities: CapabilityInfo,
    pub safety_info: SafetyInfo,
}

/// Pricing summary with the derived free flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceInfo {
    pub is_free: bool,
    pub prompt_price: String,
    pub completion_price: String,
}

/// Upstream architecture metadata, passed through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchitectureInfo {
    pub modality: String,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
    pub tokenizer: String,
    pub instruct_type: Option<String>,
}

/// Upstream capability metadata, passed through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilityInfo {
    pub max_completion_tokens: Option<u64>,
    pub is_moderated: bool,
    pub supported_parameters: Vec<String>,
}

/// Upstream moderation/limit metadata, passed through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SafetyInfo {
    pub is_moderated: bool,
    pub per_request_limits: Option<serde_json::Value>,
}

/// A model is free when its prompt price is zero or its id carries the
/// upstream free marker.
#[must_use]
pub fn is_free(id: &str, prompt_price: &str) -> bool {
    prompt_price == "0" || id.contains(":free")
}

/// Derive the provider name from a model id (`provider/model-name`).
#[must_use]
pub fn provider_from_id(id: &str) -> &str {
    match id.split_once('/') {
        Some((provider, _)) => provider,
        None => "unknown",
    }
}

/// Price bucket filter for the catalog endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    All,
    Free,
    Paid,
}

impl PriceFilter {
    /// Parse a query value; anything unrecognized behaves like `all`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "free" => Self::Free,
            "paid" => Self::Paid,
            _ => Self::All,
        }
    }
}

/// Keep only records matching the price bucket.
#[must_use]
pub fn filter_by_price(mut models: Vec<ModelRecord>, filter: PriceFilter) -> Vec<ModelRecord> {
    match filter {
        PriceFilter::All => {}
        PriceFilter::Free => models.retain(|m| m.pricing.is_free),
        PriceFilter::Paid => models.retain(|m| !m.pricing.is_free),
    }
    models
}

/// Keep only records whose derived category set contains `category`.
///
/// `"all"` returns the input unfiltered.
#[must_use]
pub fn filter_by_category(mut models: Vec<ModelRecord>, category: &str) -> Vec<ModelRecord> {
    if category != "all" {
        models.retain(|m| m.categories.iter().any(|c| c == category));
    }
    models
}
