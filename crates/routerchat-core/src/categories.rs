//! Category derivation for catalog entries.
//!
//! Categories are cheap tags computed from upstream metadata: input
//! modalities, supported parameters, keyword matches over the combined
//! name/description/id text, a provider specialty table and context-length
//! thresholds. The result is sorted and deduplicated so catalog responses
//! are deterministic.

use std::collections::BTreeSet;

use crate::domain::provider_from_id;

/// Keyword table matched against the lowercased `name description id` text.
const CONTENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "code",
        &[
            "code",
            "programming",
            "developer",
            "coding",
            "github",
            "python",
            "javascript",
        ],
    ),
    (
        "math",
        &["math", "mathematical", "calculation", "solver", "theorem"],
    ),
    (
        "reasoning",
        &["reasoning", "logic", "analysis", "think", "step-by-step"],
    ),
    (
        "creative",
        &["creative", "writing", "story", "literature", "poetry", "novel"],
    ),
    (
        "roleplay",
        &["roleplay", "character", "persona", "chat", "assistant"],
    ),
    (
        "uncensored",
        &["uncensored", "nsfw", "unfiltered", "unconstrained"],
    ),
    ("fast", &["fast", "speed", "quick", "nano", "turbo", "instant"]),
    ("large", &["large", "big", "giant", "huge", "massive"]),
    ("small", &["small", "mini", "tiny", "lite", "compact"]),
];

/// Provider specialty table keyed by the id prefix.
const PROVIDER_SPECIALTIES: &[(&str, &[&str])] = &[
    ("anthropic", &["reasoning", "helpful"]),
    ("openai", &["general", "popular"]),
    ("meta-llama", &["open-source"]),
    ("google", &["research", "advanced"]),
    ("mistralai", &["efficient"]),
    ("deepseek", &["reasoning", "code"]),
    ("qwen", &["multilingual"]),
    ("microsoft", &["enterprise"]),
    ("cohere", &["search", "embeddings"]),
];

/// Context-length thresholds (tokens).
const LONG_CONTEXT: u64 = 128_000;
const MEDIUM_CONTEXT: u64 = 32_000;
const SHORT_CONTEXT: u64 = 8_192;

/// The upstream facts category derivation looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFacts<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub input_modalities: &'a [String],
    pub supported_parameters: &'a [String],
    pub context_length: Option<u64>,
}

/// Derive the category set for one catalog entry.
#[must_use]
pub fn derive_categories(facts: &CategoryFacts<'_>) -> Vec<String> {
    let mut categories: BTreeSet<&str> = BTreeSet::new();

    // Modality tags
    let has_image = facts.input_modalities.iter().any(|m| m == "image");
    let has_text = facts.input_modalities.iter().any(|m| m == "text");
    if has_image {
        categories.insert("vision");
    }
    if has_text && has_image {
        categories.insert("multimodal");
    }

    // Capability tags
    if facts.supported_parameters.iter().any(|p| p == "tools") {
        categories.insert("tools");
    }
    if facts.supported_parameters.iter().any(|p| p == "reasoning") {
        categories.insert("reasoning");
    }

    // Keyword tags over the combined text
    let combined = format!("{} {} {}", facts.name, facts.description, facts.id).to_lowercase();
    for (category, keywords) in CONTENT_KEYWORDS {
        if keywords.iter().any(|kw| combined.contains(kw)) {
            categories.insert(category);
        }
    }

    // Provider specialty tags
    let provider = provider_from_id(facts.id);
    if let Some((_, specialties)) = PROVIDER_SPECIALTIES.iter().find(|(p, _)| *p == provider) {
        categories.extend(specialties.iter().copied());
    }

    // Context-length tags
    if let Some(ctx) = facts.context_length {
        if ctx >= LONG_CONTEXT {
            categories.insert("long-context");
        } else if ctx >= MEDIUM_CONTEXT {
            categories.insert("medium-context");
        } else if ctx <= SHORT_CONTEXT {
            categories.insert("short-context");
        }
    }

    categories.into_iter().map(ToString::to_string).collect()
}

/// Human-readable label for a category value.
///
/// Unknown categories fall back to a Title-Case rendering.
#[must_use]
pub fn display_label(value: &str) -> String {
    let label = match value {
        "vision" => "👁️ Vision",
        "multimodal" => "🔄 Multimodal",
        "tools" => "🛠️ Tools",
        "reasoning" => "🧠 Reasoning",
        "code" => "💻 Code",
        "math" => "🔢 Math",
        "creative" => "🎨 Creative",
        "roleplay" => "🎭 Roleplay",
        "uncensored" => "🔓 Uncensored",
        "fast" => "⚡ Fast",
        "large" => "📏 Large",
        "small" => "📦 Small",
        "long-context" => "📜 Long Context",
        "medium-context" => "📄 Medium Context",
        "short-context" => "📝 Short Context",
        "open-source" => "🌐 Open Source",
        "general" => "🌍 General",
        "popular" => "⭐ Popular",
        "research" => "🔬 Research",
        "advanced" => "🚀 Advanced",
        "efficient" => "⚙️ Efficient",
        "multilingual" => "🌎 Multilingual",
        "enterprise" => "🏢 Enterprise",
        "helpful" => "🤝 Helpful",
        "search" => "🔍 Search",
        "embeddings" => "🔗 Embeddings",
        _ => return title_case(value),
    };
    label.to_string()
}

fn title_case(value: &str) -> String {
    value
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn vision_and_multimodal_from_input_modalities() {
        let inputs = strings(&["text", "image"]);
        let facts = CategoryFacts {
            id: "acme/viewer",
            input_modalities: &inputs,
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&facts);
        assert!(categories.contains(&"vision".to_string()));
        assert!(categories.contains(&"multimodal".to_string()));
    }

    #[test]
    fn image_only_is_vision_but_not_multimodal() {
        let inputs = strings(&["image"]);
        let facts = CategoryFacts {
            id: "acme/viewer",
            input_modalities: &inputs,
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&facts);
        assert!(categories.contains(&"vision".to_string()));
        assert!(!categories.contains(&"multimodal".to_string()));
    }

    #[test]
    fn capability_tags_from_supported_parameters() {
        let params = strings(&["tools", "reasoning", "temperature"]);
        let facts = CategoryFacts {
            id: "acme/agent",
            supported_parameters: &params,
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&facts);
        assert!(categories.contains(&"tools".to_string()));
        assert!(categories.contains(&"reasoning".to_string()));
    }

    #[test]
    fn keyword_match_over_combined_text() {
        let facts = CategoryFacts {
            id: "acme/workhorse",
            name: "Workhorse Turbo",
            description: "A model tuned for Python programming.",
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&facts);
        assert!(categories.contains(&"code".to_string()));
        assert!(categories.contains(&"fast".to_string()));
    }

    #[test]
    fn provider_specialties_applied() {
        let facts = CategoryFacts {
            id: "deepseek/deepseek-v3",
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&facts);
        assert!(categories.contains(&"reasoning".to_string()));
        assert!(categories.contains(&"code".to_string()));
    }

    #[test]
    fn context_length_thresholds() {
        let long = CategoryFacts {
            id: "a/b",
            context_length: Some(131_072),
            ..CategoryFacts::default()
        };
        assert!(derive_categories(&long).contains(&"long-context".to_string()));

        let medium = CategoryFacts {
            id: "a/b",
            context_length: Some(32_768),
            ..CategoryFacts::default()
        };
        assert!(derive_categories(&medium).contains(&"medium-context".to_string()));

        let short = CategoryFacts {
            id: "a/b",
            context_length: Some(8_192),
            ..CategoryFacts::default()
        };
        assert!(derive_categories(&short).contains(&"short-context".to_string()));

        // Between short and medium: no context tag at all
        let between = CategoryFacts {
            id: "a/b",
            context_length: Some(16_384),
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&between);
        assert!(!categories.iter().any(|c| c.ends_with("-context")));
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        // "deepseek" provider contributes "reasoning"; so does the keyword table.
        let facts = CategoryFacts {
            id: "deepseek/thinker",
            description: "step-by-step reasoning",
            ..CategoryFacts::default()
        };
        let categories = derive_categories(&facts);
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn known_labels_and_title_case_fallback() {
        assert_eq!(display_label("code"), "💻 Code");
        assert_eq!(display_label("long-context"), "📜 Long Context");
        assert_eq!(display_label("open-source"), "🌐 Open Source");
        assert_eq!(display_label("brand-new-tag"), "Brand New Tag");
    }
}
