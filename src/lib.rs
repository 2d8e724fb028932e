pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod extractor;
pub mod logging;
pub mod pipeline;
pub mod prompter;
pub mod scheduler;
pub mod ui;

pub use crate::core::models::{Extraction, TaskCandidate, WeeklyPlan};
pub use crate::core::settings::PlannerSettings;
pub use crate::errors::{Error, Result};
pub use crate::pipeline::{Pipeline, PipelineOutput, build_7_day_plan, extract_and_classify_tasks};
