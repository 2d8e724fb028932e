//! The two call-and-response operations an orchestrator drives:
//! raw text → classified tasks, and task payload → seven-day plan.

use crate::core::models::{Extraction, TaskCandidate, WeeklyPlan};
use crate::core::settings::PlannerSettings;
use crate::errors::{Error, Result};
use crate::extractor::Extractor;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::{
    SchedulerSettings, WeeklyPlanner, build_plan, build_plan_logged, check_start_date,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// Combined result of one full run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub extraction: Extraction,
    pub plan: WeeklyPlan,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    extractor: Extractor,
    scheduler: SchedulerSettings,
    start_date: Option<NaiveDate>,
    logger: Option<Logger>,
}

impl Pipeline {
    pub fn new(settings: &PlannerSettings) -> Result<Self> {
        check_start_date(settings.start_date)?;
        Ok(Self {
            extractor: Extractor::new(settings.extractor.clone(), &settings.rules)?,
            scheduler: settings.scheduler.clone(),
            start_date: settings.start_date,
            logger: None,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&PlannerSettings::default())
    }

    /// Placements and counts go to this logger's session file.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn extract(&self, raw_text: &str) -> Result<Extraction> {
        let extraction = self.extractor.extract_and_classify(raw_text);
        if let Some(logger) = &self.logger {
            match &extraction {
                Ok(e) => logger.info(
                    format!(
                        "Extracted {} task(s): {} urgent, {} soon, {} normal, {} low",
                        e.summary.total_tasks,
                        e.summary.urgent,
                        e.summary.soon,
                        e.summary.normal,
                        e.summary.low
                    ),
                    LogTarget::FileOnly,
                ),
                Err(err) => logger.error(format!("Extraction failed: {err}"), LogTarget::FileOnly),
            }
        }
        extraction
    }

    pub fn plan(&self, tasks: &[TaskCandidate]) -> WeeklyPlan {
        match &self.logger {
            Some(logger) => build_plan_logged(tasks, &self.scheduler, self.start_date, logger),
            None => WeeklyPlanner::new(&self.scheduler)
                .with_start_date(self.start_date)
                .build(tasks),
        }
    }

    /// `{ "tasks": [...], "summary": {...} }`
    pub fn extract_and_classify_tasks(&self, raw_text: &str) -> Result<Value> {
        Ok(serde_json::to_value(self.extract(raw_text)?)?)
    }

    /// `{ "days": [{ "index": 1, "tasks": [...] }, ...] }`
    pub fn build_7_day_plan(&self, payload: &Value) -> Result<Value> {
        let tasks = parse_payload(payload)?;
        Ok(serde_json::to_value(self.plan(&tasks))?)
    }

    pub fn run(&self, raw_text: &str) -> Result<PipelineOutput> {
        let extraction = self.extract(raw_text)?;
        let plan = self.plan(&extraction.tasks);
        Ok(PipelineOutput { extraction, plan })
    }
}

/// Reads the task list out of an extraction-shaped payload. A missing `tasks`
/// key is an empty list; anything else malformed is rejected.
pub fn parse_payload(payload: &Value) -> Result<Vec<TaskCandidate>> {
    let object = payload
        .as_object()
        .ok_or_else(|| Error::invalid_input("Task payload must be a JSON object."))?;
    let items = match object.get("tasks") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(Error::invalid_input("'tasks' must be a JSON array.")),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let task: TaskCandidate = serde_json::from_value(item.clone())
                .map_err(|e| Error::invalid_input(format!("Task {} is malformed: {e}", i + 1)))?;
            if task.raw_text.trim().is_empty() {
                return Err(Error::invalid_input(format!(
                    "Task {} has empty raw_text.",
                    i + 1
                )));
            }
            Ok(task)
        })
        .collect()
}

/// Extraction with the built-in settings.
pub fn extract_and_classify_tasks(raw_text: &str) -> Result<Value> {
    Pipeline::with_defaults()?.extract_and_classify_tasks(raw_text)
}

/// Plan with the built-in settings; undated and side-effect free.
pub fn build_7_day_plan(payload: &Value) -> Result<Value> {
    let tasks = parse_payload(payload)?;
    Ok(serde_json::to_value(build_plan(
        &tasks,
        &SchedulerSettings::default(),
    ))?)
}
