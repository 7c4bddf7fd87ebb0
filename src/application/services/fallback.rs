/// Intent of the stage whose external call failed. Passed explicitly by the
/// pipeline, never inferred from prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackIntent {
    Research,
    Structuring,
    ImageConcepts,
    Seo,
    GenericArticle,
}

/// Deterministic templated text substituted when a stage's external call
/// fails or returns unusable output. Pure, no I/O, always succeeds; every
/// template interpolates the topic.
pub fn fallback_content(intent: FallbackIntent, topic: &str) -> String {
    match intent {
        FallbackIntent::Research => format!(
            r#"# Research Summary: {topic}

## Key Points
- Current trends and developments in {topic}
- Industry applications and use cases
- Benefits and challenges
- Future outlook and opportunities

## Key Statistics
- Growing market interest in {topic}
- Increasing adoption across industries
- Emerging technologies and innovations

*Note: This is a simplified overview. For the most current information, please consult recent industry reports and academic sources.*"#
        ),
        FallbackIntent::Structuring => format!(
            r#"# Article Structure: {topic}

## Title Options
- "Complete Guide to {topic}"
- "Understanding {topic}: A Comprehensive Overview"
- "Everything You Need to Know About {topic}"

## Article Outline
1. **Introduction**
   - What is {topic}?
   - Why it matters today
2. **Core Concepts**
   - Fundamental principles
   - Key terminology
3. **Applications & Benefits**
   - Real-world use cases
   - Advantages and impact
4. **Implementation**
   - Getting started
   - Best practices
5. **Conclusion**
   - Key takeaways
   - Future considerations"#
        ),
        FallbackIntent::ImageConcepts => format!(
            r#"# Image Concepts for {topic}

## 1. Header Image
- **Description**: Professional illustration showcasing {topic} concepts
- **Alt text**: "{topic} overview illustration"
- **Placement**: Top of article

## 2. Concept Diagram
- **Description**: Flowchart or diagram explaining the {topic} process
- **Alt text**: "{topic} process diagram"
- **Placement**: After introduction

## 3. Practical Example
- **Description**: Screenshot or example of {topic} in action
- **Alt text**: "{topic} practical example"
- **Placement**: Mid-article

## 4. Summary Infographic
- **Description**: Visual summary of key points about {topic}
- **Alt text**: "{topic} key points infographic"
- **Placement**: Before conclusion"#
        ),
        FallbackIntent::Seo => {
            let lower = topic.to_lowercase();
            format!(
                r#"# SEO Optimization for {topic}

## Title Variations
1. "Complete Guide to {topic}"
2. "Understanding {topic}: Expert Tips & Best Practices"
3. "{topic} Explained: Everything You Need to Know"

## Meta Description
"Comprehensive guide to {topic}. Learn key concepts, applications, and best practices from industry experts."

## Keywords
- Primary: {lower}
- Secondary: {lower} guide, {lower} tips, {lower} best practices

## Content Improvements
- Add more practical examples
- Include case studies
- Update with current trends
- Add call-to-action sections"#
            )
        }
        FallbackIntent::GenericArticle => format!(
            r#"# Complete Guide to {topic}

## Introduction
{topic} is an important subject that affects many aspects of modern life. Understanding its principles and applications can provide valuable insights for both personal and professional development.

## What is {topic}?
{topic} encompasses a range of concepts and practices that have evolved significantly over recent years. Its importance continues to grow as technology and society advance.

## Key Benefits
- Improved understanding of complex concepts
- Practical applications in various fields
- Enhanced decision-making capabilities
- Better preparation for future developments

## Applications
{topic} finds applications across multiple industries and use cases:

### Industry Applications
- Technology sector implementations
- Business process improvements
- Educational and training programs
- Research and development initiatives

### Practical Use Cases
- Daily workflow optimization
- Strategic planning and analysis
- Innovation and creative problem-solving
- Long-term sustainable practices

## Best Practices
To effectively work with {topic}, consider these recommendations:

1. **Start with fundamentals**: Build a solid foundation of understanding
2. **Stay updated**: Keep current with the latest developments and trends
3. **Practice regularly**: Apply concepts in real-world scenarios
4. **Learn from others**: Engage with community and expert resources

## Conclusion
{topic} represents a valuable area of knowledge that continues to evolve. By understanding its principles and staying informed about developments, you can leverage its benefits for personal and professional growth.

---
*This content was generated as a fallback due to API limitations. For the most current and detailed information, please consult recent expert sources and industry publications.*"#
        ),
    }
}
