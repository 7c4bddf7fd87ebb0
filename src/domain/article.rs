use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Stage;

/// A downloadable rendering of the finished article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Html,
    Markdown,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Html => "html",
            ArtifactKind::Markdown => "markdown",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ArtifactKind::Html => "text/html; charset=utf-8",
            ArtifactKind::Markdown => "text/markdown; charset=utf-8",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            ArtifactKind::Html => "html",
            ArtifactKind::Markdown => "md",
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(ArtifactKind::Html),
            "markdown" | "md" => Ok(ArtifactKind::Markdown),
            _ => Err(format!("Invalid artifact kind: {}", s)),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured output of one completed pipeline stage. Degraded outputs were
/// produced by the fallback generator rather than the generation service.
#[derive(Debug, Clone, Serialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub content: String,
    pub degraded: bool,
}

impl StageOutput {
    pub fn generated(stage: Stage, content: String) -> Self {
        Self {
            stage,
            content,
            degraded: false,
        }
    }

    pub fn degraded(stage: Stage, content: String) -> Self {
        Self {
            stage,
            content,
            degraded: true,
        }
    }
}

/// The fully assembled output of a completed task. File paths are absent when
/// artifact persistence failed and the synthetic second-level fallback was
/// used instead.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedArticle {
    pub article_title: String,
    pub article_url_slug: String,
    pub word_count: usize,
    pub sections_count: usize,
    pub html_file_path: Option<String>,
    pub markdown_file_path: Option<String>,
    pub publish_date: String,
    pub estimated_read_time: String,
    pub markdown_content: String,
    pub html_content: String,
    pub degraded: bool,
}

/// URL-friendly slug: lowercase alphanumerics with single dashes.
pub fn url_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("article");
    }
    slug
}

/// Reading time at ~225 words per minute, never below one minute.
pub fn estimate_read_time(word_count: usize) -> String {
    let minutes = (word_count as f64 / 225.0).round().max(1.0) as usize;
    format!("{} min read", minutes)
}
