use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    ArtifactStore, GenerationClient, RegistryError, TaskRegistry,
};
use crate::application::services::{
    assembler, fallback_content, ContentConfig, FallbackIntent,
};
use crate::domain::{ArtifactKind, Stage, StageOutput, TaskId, TaskStatus, STAGE_COUNT};

/// Pacing and deadlines for pipeline execution.
#[derive(Debug, Clone)]
pub struct PipelineTiming {
    /// Overall deadline wrapping each completion call; exceeding it is a
    /// stage-level fault routed into fallback content.
    pub stage_timeout: Duration,
    /// Optional pause after each stage-start checkpoint.
    pub inter_stage_delay: Duration,
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self {
            stage_timeout: Duration::from_secs(30),
            inter_stage_delay: Duration::ZERO,
        }
    }
}

/// Drives the fixed five-stage sequence against one task record. Stage
/// faults are absorbed by the fallback generator; only a registry failure
/// outside that path fails the task.
pub struct ContentPipeline<G, A> {
    generation: Arc<G>,
    artifacts: Arc<A>,
    registry: Arc<dyn TaskRegistry>,
    timing: PipelineTiming,
}

impl<G, A> ContentPipeline<G, A>
where
    G: GenerationClient + 'static,
    A: ArtifactStore + 'static,
{
    pub fn new(
        generation: Arc<G>,
        artifacts: Arc<A>,
        registry: Arc<dyn TaskRegistry>,
        timing: PipelineTiming,
    ) -> Self {
        Self {
            generation,
            artifacts,
            registry,
            timing,
        }
    }

    /// Entry point for one background job. Never panics or propagates:
    /// catastrophic faults end as a terminal Failed record.
    pub async fn run(&self, task_id: TaskId, topic: String, config: ContentConfig) {
        match self.execute(task_id, &topic, &config).await {
            Ok(_) => {}
            Err(PipelineError::Registry(RegistryError::TerminalState(_))) => {
                // Lost the race with a cancellation; the record is frozen.
                tracing::info!("Pipeline stopped: record already terminal");
            }
            Err(e) => {
                tracing::error!(error = %e, "Pipeline failed");
                let message = format!("Content creation failed: {}", e);
                if let Err(fail_err) = self.registry.fail(task_id, &message).await {
                    tracing::error!(error = %fail_err, "Failed to mark task as failed");
                }
            }
        }
    }

    async fn execute(
        &self,
        task_id: TaskId,
        topic: &str,
        config: &ContentConfig,
    ) -> Result<(), PipelineError> {
        let mut outputs: Vec<StageOutput> = Vec::with_capacity(STAGE_COUNT);
        let mut degraded = false;

        for stage in Stage::ALL {
            if self.cancelled(task_id).await? {
                tracing::info!(stage = %stage, "Cancellation observed at stage boundary");
                return Ok(());
            }

            self.registry
                .begin_stage(
                    task_id,
                    stage.index(),
                    stage.start_checkpoint(),
                    stage.operation(),
                )
                .await?;

            if !self.timing.inter_stage_delay.is_zero() {
                tokio::time::sleep(self.timing.inter_stage_delay).await;
            }

            let output = self.execute_stage(stage, topic, config, &outputs).await;
            degraded |= output.degraded;

            tracing::debug!(
                stage = %stage,
                degraded = output.degraded,
                chars = output.content.len(),
                "Stage completed"
            );

            self.registry
                .complete_stage(
                    task_id,
                    stage.index(),
                    stage.completion_checkpoint(),
                    output.clone(),
                )
                .await?;

            outputs.push(output);
        }

        let article = self.publish(topic, config, &outputs, degraded).await;
        self.registry
            .complete(task_id, article, "Completed successfully")
            .await?;

        tracing::info!("Content creation completed");
        Ok(())
    }

    async fn cancelled(&self, task_id: TaskId) -> Result<bool, PipelineError> {
        let record = self
            .registry
            .get(task_id)
            .await?
            .ok_or_else(|| PipelineError::RecordLost(task_id))?;
        Ok(record.status == TaskStatus::Cancelled)
    }

    async fn execute_stage(
        &self,
        stage: Stage,
        topic: &str,
        config: &ContentConfig,
        prior: &[StageOutput],
    ) -> StageOutput {
        match stage {
            Stage::InputProcessing => {
                // Local normalization only; this stage has no external call.
                let brief = format!(
                    "Topic: {}\nTarget audience: {}\nContent type: {}\nContent length: {}\nTone: {}\nTechnical details: {}",
                    topic,
                    config.target_audience,
                    config.content_type,
                    config.content_length,
                    config.tone,
                    config.include_technical_details,
                );
                StageOutput::generated(stage, brief)
            }
            Stage::Research => {
                let prompt = format!(
                    "Research the topic \"{}\" and provide:\n\
                     1. Key facts and current trends\n\
                     2. Main subtopics to cover\n\
                     3. Target audience considerations for {}\n\
                     4. 3-5 important points to highlight\n\n\
                     Keep it concise but comprehensive.",
                    topic, config.target_audience
                );
                self.generate_or_fallback(
                    stage,
                    FallbackIntent::Research,
                    topic,
                    &prompt,
                    "You are an expert researcher. Provide accurate, up-to-date information.",
                )
                .await
            }
            Stage::Structuring => {
                let research = stage_content(prior, Stage::Research);
                let outline_prompt = format!(
                    "Based on this research:\n{}\n\n\
                     Create a detailed outline for an article about \"{}\" with:\n\
                     - Compelling title\n\
                     - Introduction hook\n\
                     - 3-5 main sections with subsections\n\
                     - Conclusion strategy\n\
                     - Target audience: {}\n\
                     - Writing style: {}\n\
                     - Length: {}",
                    truncate(research, 500),
                    topic,
                    config.target_audience,
                    config.tone,
                    config.content_length
                );
                let outline = self
                    .generate_or_fallback(
                        stage,
                        FallbackIntent::Structuring,
                        topic,
                        &outline_prompt,
                        "You are a content strategist. Create engaging, well-structured outlines.",
                    )
                    .await;

                let article_prompt = format!(
                    "Write a complete article about \"{}\" using this structure:\n{}\n\n\
                     Requirements:\n\
                     - Target audience: {}\n\
                     - Writing style: {}\n\
                     - Length: {} (at most {} words)\n\
                     - Include practical examples\n\
                     - Use markdown formatting with a single top-level `#` title\n\
                     - Add relevant headers and subheaders{}{}",
                    topic,
                    truncate(&outline.content, 800),
                    config.target_audience,
                    config.tone,
                    config.content_length,
                    config.max_word_count,
                    if config.include_toc {
                        "\n- Structure sections so a table of contents can be derived"
                    } else {
                        ""
                    },
                    if config.include_references {
                        "\n- Close with a short references section"
                    } else {
                        ""
                    },
                );
                let system = format!(
                    "You are an expert {} writer. Create high-quality content that engages {} readers.",
                    config.tone.to_lowercase(),
                    config.target_audience.to_lowercase()
                );
                let article = self
                    .generate_or_fallback(
                        stage,
                        FallbackIntent::GenericArticle,
                        topic,
                        &article_prompt,
                        &system,
                    )
                    .await;

                StageOutput {
                    stage,
                    degraded: outline.degraded || article.degraded,
                    content: article.content,
                }
            }
            Stage::VisualDesign => {
                let article = stage_content(prior, Stage::Structuring);
                let prompt = format!(
                    "Based on this article about \"{}\":\n{}\n\n\
                     Create 3-4 detailed image descriptions that would enhance this article:\n\
                     1. A main header image\n\
                     2. Supporting diagrams or illustrations\n\
                     3. Practical examples or screenshots\n\
                     4. Infographic concepts\n\n\
                     For each image, provide a generation description, alt text for \
                     accessibility, and a placement suggestion.",
                    topic,
                    truncate(article, 500)
                );
                self.generate_or_fallback(
                    stage,
                    FallbackIntent::ImageConcepts,
                    topic,
                    &prompt,
                    "You are a visual content strategist. Create compelling image concepts that enhance written content.",
                )
                .await
            }
            Stage::Publishing => {
                let article = stage_content(prior, Stage::Structuring);
                let prompt = format!(
                    "Optimize this article for search and provide final recommendations:\n\n\
                     Article:\n{}\n\n\
                     Provide:\n\
                     1. Title variations (3-4 options)\n\
                     2. Meta description (155 characters max)\n\
                     3. Primary and secondary keywords\n\
                     4. Content improvements for better engagement",
                    truncate(article, 500)
                );
                self.generate_or_fallback(
                    stage,
                    FallbackIntent::Seo,
                    topic,
                    &prompt,
                    "You are an SEO expert. Optimize content for search engines while maintaining readability.",
                )
                .await
            }
        }
    }

    /// One completion call bounded by the stage deadline. Any fault or
    /// empty output degrades to fallback content; the pipeline never fails
    /// here.
    async fn generate_or_fallback(
        &self,
        stage: Stage,
        intent: FallbackIntent,
        topic: &str,
        prompt: &str,
        system_prompt: &str,
    ) -> StageOutput {
        let call = self.generation.complete(prompt, system_prompt);
        match tokio::time::timeout(self.timing.stage_timeout, call).await {
            Ok(Ok(text)) if !text.trim().is_empty() => StageOutput::generated(stage, text),
            Ok(Ok(_)) => {
                tracing::warn!(stage = %stage, "Generation returned empty output, using fallback");
                StageOutput::degraded(stage, fallback_content(intent, topic))
            }
            Ok(Err(e)) => {
                tracing::warn!(stage = %stage, error = %e, "Generation failed, using fallback");
                StageOutput::degraded(stage, fallback_content(intent, topic))
            }
            Err(_) => {
                tracing::warn!(stage = %stage, "Generation deadline exceeded, using fallback");
                StageOutput::degraded(stage, fallback_content(intent, topic))
            }
        }
    }

    /// Final assembly plus artifact writes. A failure anywhere in here
    /// degrades to the synthetic second-level fallback rather than failing
    /// the task; missing artifacts surface later as NotReady on download.
    async fn publish(
        &self,
        topic: &str,
        config: &ContentConfig,
        outputs: &[StageOutput],
        degraded: bool,
    ) -> crate::domain::PublishedArticle {
        let article_markdown = stage_content(outputs, Stage::Structuring);
        if article_markdown.trim().is_empty() {
            tracing::warn!("No article content to assemble, using synthetic result");
            return assembler::synthetic_article(topic, degraded);
        }

        let mut article = assembler::assemble_article(topic, config, article_markdown, degraded);

        let markdown_path = self
            .artifacts
            .save(
                &article.article_url_slug,
                ArtifactKind::Markdown,
                &article.markdown_content,
            )
            .await;
        let html_path = self
            .artifacts
            .save(
                &article.article_url_slug,
                ArtifactKind::Html,
                &article.html_content,
            )
            .await;

        match (markdown_path, html_path) {
            (Ok(md), Ok(html)) => {
                article.markdown_file_path = Some(md);
                article.html_file_path = Some(html);
                article
            }
            (md, html) => {
                if let Err(e) = &md {
                    tracing::warn!(error = %e, "Markdown artifact write failed");
                }
                if let Err(e) = &html {
                    tracing::warn!(error = %e, "HTML artifact write failed");
                }
                article.markdown_file_path = md.ok();
                article.html_file_path = html.ok();
                article
            }
        }
    }
}

fn stage_content(outputs: &[StageOutput], stage: Stage) -> &str {
    outputs
        .iter()
        .find(|o| o.stage == stage)
        .map(|o| o.content.as_str())
        .unwrap_or("")
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
    #[error("task record lost: {0}")]
    RecordLost(TaskId),
}
