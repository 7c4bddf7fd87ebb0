use scriptorium::application::services::assembler::{
    assemble_article, count_sections, count_words, extract_title, synthetic_article,
};
use scriptorium::application::services::ContentConfig;

const ARTICLE: &str = "# Rust in Production\n\nIntro paragraph.\n\n## Adoption\n\nBody text here.\n\n## Tooling\n\nMore body text.\n";

#[test]
fn given_markdown_with_heading_when_extracting_title_then_uses_first_heading() {
    assert_eq!(extract_title(ARTICLE, "Rust"), "Rust in Production");
}

#[test]
fn given_markdown_without_heading_when_extracting_title_then_uses_template() {
    assert_eq!(
        extract_title("plain text only", "Rust"),
        "The Complete Guide to Rust"
    );
}

#[test]
fn given_markdown_when_counting_then_words_and_sections_match() {
    assert_eq!(count_sections(ARTICLE), 2);
    assert!(count_words(ARTICLE) > 10);
}

#[test]
fn given_article_markdown_when_assembled_then_fields_are_derived() {
    let config = ContentConfig::default();
    let article = assemble_article("Rust", &config, ARTICLE, false);

    assert_eq!(article.article_title, "Rust in Production");
    assert_eq!(article.article_url_slug, "rust-in-production");
    assert_eq!(article.sections_count, 2);
    assert!(article.word_count > 0);
    assert!(!article.degraded);
    assert!(article.html_file_path.is_none());
    assert!(article.markdown_file_path.is_none());
    assert_eq!(article.markdown_content, ARTICLE);
    assert!(article.html_content.contains("<title>Rust in Production</title>"));
    assert!(article.html_content.contains("Rust in Production"));
}

#[test]
fn given_toc_enabled_when_assembled_then_html_links_sections() {
    let config = ContentConfig::default();
    let article = assemble_article("Rust", &config, ARTICLE, false);
    assert!(article.html_content.contains("Table of Contents"));
    assert!(article.html_content.contains("href=\"#adoption\""));
    assert!(article.html_content.contains("href=\"#tooling\""));
}

#[test]
fn given_toc_disabled_when_assembled_then_html_omits_toc() {
    let config = ContentConfig {
        include_toc: false,
        ..ContentConfig::default()
    };
    let article = assemble_article("Rust", &config, ARTICLE, false);
    assert!(!article.html_content.contains("Table of Contents"));
}

#[test]
fn given_degraded_pipeline_when_assembled_then_flag_propagates() {
    let config = ContentConfig::default();
    let article = assemble_article("Rust", &config, ARTICLE, true);
    assert!(article.degraded);
}

#[test]
fn given_assembly_failure_when_synthesizing_then_result_is_topic_specific() {
    let article = synthetic_article("Quantum Computing", true);
    assert!(article.article_title.contains("Quantum Computing"));
    assert!(article.markdown_content.contains("Quantum Computing"));
    assert!(article.html_content.contains("Quantum Computing"));
    assert!(article.word_count > 0);
    assert!(article.html_file_path.is_none());
    assert!(article.markdown_file_path.is_none());
}
