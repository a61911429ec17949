//! Domain types and pure logic for routerchat.
//!
//! This crate holds everything that can be computed without I/O: the enriched
//! model catalog types, category derivation, price/category filtering and the
//! outbound chat-message window. Infrastructure crates (the OpenRouter client
//! and the Axum adapter) depend on this crate, never the other way around.

#![deny(unused_crate_dependencies)]

pub mod categories;
pub mod domain;

// Re-export commonly used types for convenience
pub use categories::{CategoryFacts, derive_categories, display_label};
pub use domain::{
    ArchitectureInfo, CapabilityInfo, ChatMessage, ChatReply, HISTORY_WINDOW, ModelRecord,
    PriceFilter, PriceInfo, SafetyInfo, TokenUsage, build_outbound_messages, filter_by_category,
    filter_by_price, is_free, provider_from_id,
};
