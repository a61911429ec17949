//! Domain model for the proxy: catalog records and chat messages.

pub mod chat;
pub mod model;

pub use chat::{ChatMessage, ChatReply, HISTORY_WINDOW, TokenUsage, build_outbound_messages};
pub use model::{
    ArchitectureInfo, CapabilityInfo, ModelRecord, PriceFilter, PriceInfo, SafetyInfo,
    filter_by_category, filter_by_price, is_free, provider_from_id,
};
