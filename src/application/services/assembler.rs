use chrono::Utc;

use crate::application::services::ContentConfig;
use crate::domain::{estimate_read_time, url_slug, PublishedArticle};

/// Title from the article's first `#` heading, with a templated default when
/// the content carries none.
pub fn extract_title(markdown: &str, topic: &str) -> String {
    markdown
        .lines()
        .find_map(|line| {
            let line = line.trim();
            line.strip_prefix("# ")
                .map(|rest| rest.trim().to_string())
                .filter(|t| !t.is_empty())
        })
        .unwrap_or_else(|| format!("The Complete Guide to {}", topic))
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_sections(markdown: &str) -> usize {
    markdown
        .lines()
        .filter(|line| line.trim_start().starts_with("## "))
        .count()
}

fn toc_entries(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("## "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn image_urls(title: &str, sections: usize, config: &ContentConfig) -> Vec<String> {
    if config.generate_real_images {
        let seed = title
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32))
            % 1000;
        let mut urls = vec![format!("https://picsum.photos/800/400?random={}", seed)];
        urls.extend(
            (0..sections.min(3)).map(|i| {
                format!("https://picsum.photos/600/300?random={}", (seed + 1 + i as u32) % 1000)
            }),
        );
        urls
    } else {
        let mut urls =
            vec!["https://via.placeholder.com/800x400/667eea/white?text=Hero+Image".to_string()];
        urls.extend((0..sections.min(3)).map(|i| {
            format!(
                "https://via.placeholder.com/600x300/764ba2/white?text=Section+{}",
                i + 1
            )
        }));
        urls
    }
}

fn render_toc(entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut html = String::from("<nav class=\"table-of-contents\">\n<h3>Table of Contents</h3>\n<ul>\n");
    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>\n",
            url_slug(entry),
            entry
        ));
    }
    html.push_str("</ul>\n</nav>\n");
    html
}

fn render_html(
    title: &str,
    meta_description: &str,
    markdown: &str,
    toc: &[String],
    read_time: &str,
    images: &[String],
    publish_date: &str,
) -> String {
    let hero = images
        .first()
        .map(|url| format!("<div class=\"hero-image\"><img src=\"{}\" alt=\"Hero image for {}\"/></div>\n", url, title))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="description" content="{meta_description}">
<meta property="og:title" content="{title}">
<meta property="og:type" content="article">
<title>{title}</title>
</head>
<body>
<div class="container">
<header>
<h1>{title}</h1>
<p class="meta">{publish_date} &middot; {read_time}</p>
</header>
{hero}{toc_html}<article>
<pre class="markdown-body">
{markdown}
</pre>
</article>
</div>
</body>
</html>
"#,
        toc_html = render_toc(toc),
    )
}

/// Builds the final article from the structured content. Artifact paths are
/// filled in by the caller after the writes succeed.
pub fn assemble_article(
    topic: &str,
    config: &ContentConfig,
    article_markdown: &str,
    degraded: bool,
) -> PublishedArticle {
    let title = extract_title(article_markdown, topic);
    let slug = url_slug(&title);
    let word_count = count_words(article_markdown);
    let sections_count = count_sections(article_markdown);
    let read_time = estimate_read_time(word_count);
    let publish_date = Utc::now().format("%B %d, %Y").to_string();
    let meta_description = format!(
        "Complete guide to {} with practical examples and best practices",
        topic
    );

    let toc = if config.include_toc {
        toc_entries(article_markdown)
    } else {
        Vec::new()
    };
    let images = image_urls(&title, sections_count, config);
    let html_content = render_html(
        &title,
        &meta_description,
        article_markdown,
        &toc,
        &read_time,
        &images,
        &publish_date,
    );

    PublishedArticle {
        article_title: title,
        article_url_slug: slug,
        word_count,
        sections_count,
        html_file_path: None,
        markdown_file_path: None,
        publish_date,
        estimated_read_time: read_time,
        markdown_content: article_markdown.to_string(),
        html_content,
        degraded,
    }
}

/// Second-level fallback: a minimal synthetic result used when assembly or
/// artifact persistence fails. Always well-formed and topic-specific.
pub fn synthetic_article(topic: &str, degraded: bool) -> PublishedArticle {
    let title = format!("The Complete Guide to {}", topic);
    let slug = url_slug(&title);
    let markdown_content = format!(
        "# {}\n\nAn overview of {} is being prepared. Key concepts, applications, and best practices will follow.\n",
        title, topic
    );
    let word_count = count_words(&markdown_content);
    PublishedArticle {
        article_title: title.clone(),
        article_url_slug: slug,
        word_count,
        sections_count: 0,
        html_file_path: None,
        markdown_file_path: None,
        publish_date: Utc::now().format("%B %d, %Y").to_string(),
        estimated_read_time: estimate_read_time(word_count),
        html_content: format!("<h1>{}</h1>\n<p>An overview of {}.</p>\n", title, topic),
        markdown_content,
        degraded,
    }
}
