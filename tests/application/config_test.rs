use scriptorium::application::services::ContentConfig;

#[test]
fn given_empty_json_when_deserialized_then_every_option_defaults() {
    let config: ContentConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.target_audience, "general");
    assert_eq!(config.content_type, "article");
    assert_eq!(config.content_length, "medium");
    assert_eq!(config.tone, "professional");
    assert!(!config.include_technical_details);
    assert!(!config.generate_real_images);
    assert_eq!(config.max_word_count, 2000);
    assert!(config.include_toc);
    assert!(config.include_references);
    assert!(config.validate().is_ok());
}

#[test]
fn given_partial_json_when_deserialized_then_overrides_apply() {
    let config: ContentConfig =
        serde_json::from_str(r#"{"tone": "casual", "max_word_count": 500}"#).unwrap();
    assert_eq!(config.tone, "casual");
    assert_eq!(config.max_word_count, 500);
    assert_eq!(config.target_audience, "general");
}

#[test]
fn given_zero_word_count_when_validated_then_rejected() {
    let config: ContentConfig = serde_json::from_str(r#"{"max_word_count": 0}"#).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn given_blank_tone_when_validated_then_rejected() {
    let config: ContentConfig = serde_json::from_str(r#"{"tone": "  "}"#).unwrap();
    assert!(config.validate().is_err());
}
