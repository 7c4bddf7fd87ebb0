use scriptorium::application::services::{fallback_content, FallbackIntent};

const ALL_INTENTS: [FallbackIntent; 5] = [
    FallbackIntent::Research,
    FallbackIntent::Structuring,
    FallbackIntent::ImageConcepts,
    FallbackIntent::Seo,
    FallbackIntent::GenericArticle,
];

#[test]
fn given_every_intent_when_generated_then_content_interpolates_topic() {
    for intent in ALL_INTENTS {
        let content = fallback_content(intent, "Quantum Computing");
        assert!(
            content.contains("Quantum Computing"),
            "intent {:?} dropped the topic",
            intent
        );
        assert!(!content.trim().is_empty());
    }
}

#[test]
fn given_same_inputs_when_generated_twice_then_output_is_deterministic() {
    for intent in ALL_INTENTS {
        let first = fallback_content(intent, "Kubernetes");
        let second = fallback_content(intent, "Kubernetes");
        assert_eq!(first, second);
    }
}

#[test]
fn given_generic_article_intent_when_generated_then_yields_full_article() {
    let content = fallback_content(FallbackIntent::GenericArticle, "Edge Computing");
    assert!(content.starts_with("# Complete Guide to Edge Computing"));
    assert!(content.contains("## Introduction"));
    assert!(content.contains("## Conclusion"));
    assert!(content.split_whitespace().count() > 100);
}

#[test]
fn given_seo_intent_when_generated_then_uses_lowercased_keywords() {
    let content = fallback_content(FallbackIntent::Seo, "Edge Computing");
    assert!(content.contains("edge computing guide"));
}

#[test]
fn given_distinct_intents_when_generated_then_templates_differ() {
    let research = fallback_content(FallbackIntent::Research, "Topic");
    let images = fallback_content(FallbackIntent::ImageConcepts, "Topic");
    assert_ne!(research, images);
}
