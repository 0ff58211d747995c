//! Monthly content-plan generation.
//!
//! One model call that must return strict JSON. The model's calendar
//! metadata is never trusted: `month`, `startDate`, and `endDate` are
//! overwritten with the real values before the plan is persisted.

use std::fmt;
use std::path::PathBuf;

use jiff::civil::Date;
use log::info;

use super::Publisher;
use crate::error::{PipelineError, Result};
use crate::models::{month_key, MonthlyPlan};
use crate::synth::prompt;

/// Token budget for plan generation, smaller than article synthesis.
const PLAN_MAX_OUTPUT_TOKENS: u32 = 3000;

/// Result of a plan-generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanGenerated {
    pub path: PathBuf,
    pub article_count: usize,
}

impl fmt::Display for PlanGenerated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Content plan written to: {}\nPlanned articles: {}",
            self.path.display(),
            self.article_count
        )
    }
}

impl Publisher {
    /// Generates (or regenerates) the plan for the month containing `today`.
    ///
    /// Re-running only replaces this month's file; other months are never
    /// touched.
    pub async fn generate_plan(&self, today: Date) -> Result<PlanGenerated> {
        self.config.require_model_key()?;

        let start = today.first_of_month();
        let end = today.last_of_month();
        let month = month_key(today);
        let month_name = month_display_name(today);

        info!("Generating content plan for {month_name} ({start} -> {end})");

        let instructions = prompt::plan_instructions();
        let input = prompt::plan_prompt(&month_name, start, end, today);
        let raw = self
            .synthesizer
            .complete(&instructions, &input, PLAN_MAX_OUTPUT_TOKENS, Some(0.7))
            .await?;

        let mut plan: MonthlyPlan = serde_json::from_str(raw.trim()).map_err(|e| {
            PipelineError::synthesis(format!("Model returned invalid plan JSON: {e}"))
        })?;
        if plan.articles.is_empty() {
            return Err(PipelineError::synthesis(
                "Model returned a plan without articles".to_string(),
            ));
        }

        // Normalize calendar metadata to known-good values.
        plan.month = month.clone();
        plan.start_date = start;
        plan.end_date = end;

        self.store.save_for_month(&month, &plan)?;

        Ok(PlanGenerated {
            path: self.store.plan_path(&month),
            article_count: plan.articles.len(),
        })
    }
}

/// Human-readable month label, e.g. "June 2025".
fn month_display_name(date: Date) -> String {
    let name = match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    };
    format!("{name} {}", date.year())
}
