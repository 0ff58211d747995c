//! Plan store: one JSON document per calendar month.
//!
//! Writes overwrite the whole file and are not transactional, and no lock
//! is taken: the pipeline runs as a single scheduled job, and concurrent
//! invocations against the same month are outside the supported envelope.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoResultExt, Result};
use crate::models::MonthlyPlan;

/// Reads and writes monthly plan files under a fixed directory.
#[derive(Debug, Clone)]
pub struct PlanStore {
    plan_dir: PathBuf,
}

impl PlanStore {
    pub fn new(plan_dir: impl Into<PathBuf>) -> Self {
        Self {
            plan_dir: plan_dir.into(),
        }
    }

    /// Path of the plan file for a `YYYY-MM` month key.
    pub fn plan_path(&self, month_key: &str) -> PathBuf {
        self.plan_dir.join(format!("{month_key}.json"))
    }

    /// Loads the plan for a month.
    ///
    /// An absent file means "no plan exists yet" and returns `Ok(None)`;
    /// a malformed file is a fatal error with no partial recovery.
    pub fn load_for_month(&self, month_key: &str) -> Result<Option<MonthlyPlan>> {
        let path = self.plan_path(month_key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).fs_context(&path)?;
        let plan = serde_json::from_str(&raw)?;
        Ok(Some(plan))
    }

    /// Serializes the plan pretty-printed with a trailing newline and
    /// overwrites the month's file fully.
    pub fn save_for_month(&self, month_key: &str, plan: &MonthlyPlan) -> Result<()> {
        fs::create_dir_all(&self.plan_dir).fs_context(&self.plan_dir)?;
        let path = self.plan_path(month_key);
        let mut serialized = serde_json::to_string_pretty(plan)?;
        serialized.push('\n');
        fs::write(&path, serialized).fs_context(&path)?;
        Ok(())
    }

    pub fn plan_dir(&self) -> &Path {
        &self.plan_dir
    }
}
