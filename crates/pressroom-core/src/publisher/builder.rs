//! Builder for creating and configuring Publisher instances.

use std::path::{Path, PathBuf};

use super::Publisher;
use crate::config::PipelineConfig;
use crate::error::{IoResultExt, Result};
use crate::images::ImageResolver;
use crate::store::PlanStore;
use crate::synth::ArticleSynthesizer;

/// Subdirectory of the content root holding the monthly plan files.
const PLAN_DIR: &str = "content-plans";

/// Subdirectory of the content root holding persisted articles.
const ARTICLES_DIR: &str = "src/content/articles";

/// Builder for creating and configuring Publisher instances.
#[derive(Debug, Clone, Default)]
pub struct PublisherBuilder {
    root: Option<PathBuf>,
    config: Option<PipelineConfig>,
}

impl PublisherBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content root containing `content-plans/` and
    /// `src/content/articles/`. Defaults to the current directory.
    pub fn with_root<P: AsRef<Path>>(mut self, root: Option<P>) -> Self {
        if let Some(root) = root {
            self.root = Some(root.as_ref().to_path_buf());
        }
        self
    }

    /// Injects an explicit configuration instead of reading the environment.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the configured publisher, creating the articles directory if
    /// it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::FileSystem` when the content root cannot be
    /// resolved or the articles directory cannot be created.
    pub fn build(self) -> Result<Publisher> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().fs_context(Path::new("."))?,
        };
        let config = self.config.unwrap_or_else(PipelineConfig::from_env);

        let articles_dir = root.join(ARTICLES_DIR);
        std::fs::create_dir_all(&articles_dir).fs_context(&articles_dir)?;

        Ok(Publisher {
            store: PlanStore::new(root.join(PLAN_DIR)),
            articles_dir,
            resolver: ImageResolver::new(&config),
            synthesizer: ArticleSynthesizer::new(&config),
            config,
        })
    }
}
