//! High-level publication driver.
//!
//! The [`Publisher`] composes the plan store, image planner/resolver,
//! synthesizer, and composer once per invocation. It is a run-to-completion
//! batch job: all remote calls are awaited sequentially, there is no
//! internal parallelism, and no locking protects the plan file: a single
//! scheduled job per deployment is the supported envelope.
//!
//! Submodules:
//!
//! - [`builder`]: factory wiring roots and configuration into a `Publisher`
//! - [`publish`]: the per-invocation state machine (no plan / no entry /
//!   already generated / generate-persist-reconcile)
//! - [`plan_gen`]: monthly content-plan generation
//! - [`heroes`]: hero-image refresh across persisted articles

use std::path::PathBuf;

pub mod builder;
pub mod heroes;
pub mod plan_gen;
pub mod publish;

pub use builder::PublisherBuilder;
pub use heroes::HeroRefreshSummary;
pub use plan_gen::PlanGenerated;
pub use publish::PublishOutcome;

use crate::config::PipelineConfig;
use crate::images::ImageResolver;
use crate::store::PlanStore;
use crate::synth::ArticleSynthesizer;

/// File extension of persisted article documents.
pub const ARTICLE_EXT: &str = "mdx";

/// Orchestrates one pipeline invocation.
pub struct Publisher {
    pub(crate) config: PipelineConfig,
    pub(crate) store: PlanStore,
    pub(crate) articles_dir: PathBuf,
    pub(crate) resolver: ImageResolver,
    pub(crate) synthesizer: ArticleSynthesizer,
}

impl Publisher {
    /// The plan store backing this publisher.
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Directory that persisted articles are written to.
    pub fn articles_dir(&self) -> &PathBuf {
        &self.articles_dir
    }
}
