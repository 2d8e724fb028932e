use crate::extractor::ExtractorSettings;
use crate::extractor::rules::ClassifierRules;
use crate::scheduler::SchedulerSettings;
use chrono::NaiveDate;

/// The explicit configuration handed to both pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerSettings {
    pub extractor: ExtractorSettings,
    pub scheduler: SchedulerSettings,
    pub rules: ClassifierRules,
    /// Dates and labels the plan days when set; `None` keeps the plan index-only.
    pub start_date: Option<NaiveDate>,
}
