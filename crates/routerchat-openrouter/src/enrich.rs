//! Catalog enrichment.
//!
//! Raw catalog records carry only what the upstream sends. Enrichment turns
//! them into `ModelRecord`s with derived fields filled in: provider, free
//! flag, category tags, and a human-readable creation date.

use chrono::DateTime;
use routerchat_core::{
    ArchitectureInfo, CapabilityInfo, CategoryFacts, ModelRecord, PriceInfo, SafetyInfo,
    derive_categories, is_free, provider_from_id,
};

use crate::api::RawModel;

const UNKNOWN: &str = "Unknown";

/// Build an enriched `ModelRecord` from a raw catalog record.
pub fn enrich_model(raw: &RawModel) -> ModelRecord {
    let categories = derive_categories(&CategoryFacts {
        id: &raw.id,
        name: &raw.name,
        description: &raw.description,
        input_modalities: &raw.architecture.input_modalities,
        supported_parameters: &raw.supported_parameters,
        context_length: raw.context_length,
    });

    ModelRecord {
        id: raw.id.clone(),
        name: raw.name.clone(),
        description: raw.description.clone(),
        context_length: raw.context_length,
        provider: provider_from_id(&raw.id).to_string(),
        created_date: format_created(raw.created),
        hugging_face_id: raw.hugging_face_id.clone(),
        canonical_slug: raw.canonical_slug.clone(),
        pricing: PriceInfo {
            is_free: is_free(&raw.id, &raw.pricing.prompt),
            prompt_price: raw.pricing.prompt.clone(),
            completion_price: raw.pricing.completion.clone(),
        },
        categories,
        architecture: ArchitectureInfo {
            modality: raw
                .architecture
                .modality
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            input_modalities: raw.architecture.input_modalities.clone(),
            output_modalities: raw.architecture.output_modalities.clone(),
            tokenizer: raw
                .architecture
                .tokenizer
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            instruct_type: raw.architecture.instruct_type.clone(),
        },
        capabilities: CapabilityInfo {
            max_completion_tokens: raw.top_provider.max_completion_tokens,
            is_moderated: raw.top_provider.is_moderated,
            supported_parameters: raw.supported_parameters.clone(),
        },
        safety_info: SafetyInfo {
            is_moderated: raw.top_provider.is_moderated,
            per_request_limits: raw.per_request_limits.clone(),
        },
    }
}

/// Format a unix creation timestamp as `YYYY-MM-DD`; zero and absent both
/// mean unknown.
fn format_created(created: Option<i64>) -> String {
    created
        .filter(|&ts| ts != 0)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map_or_else(|| UNKNOWN.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// Static catalog used when the upstream catalog cannot be fetched. These
/// are well-known free models, run through the same enrichment as live
/// records so the response shape is identical.
pub fn fallback_models() -> Vec<ModelRecord> {
    let entries = [
        (
            "meta-llama/llama-3.1-8b-instruct:free",
            "Llama 3.1 8B (Free)",
            "Meta's Llama 3.1 8B model",
            131_072,
        ),
        (
            "google/gemma-2-9b-it:free",
            "Gemma 2 9B (Free)",
            "Google's Gemma 2 9B model",
            8192,
        ),
        (
            "mistralai/mistral-7b-instruct:free",
            "Mistral 7B (Free)",
            "Mistral's 7B instruction model",
            32_768,
        ),
        (
            "qwen/qwen-2.5-72b-instruct:free",
            "Qwen 2.5 72B (Free)",
            "Qwen's large language model",
            32_768,
        ),
    ];

    entries
        .into_iter()
        .map(|(id, name, description, context_length)| {
            enrich_model(&RawModel {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                context_length: Some(context_length),
                ..RawModel::default()
            })
        })
        .collect()
}
