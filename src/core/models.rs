use crate::core::types::{Category, Urgency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete actionable item cut out of a raw dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCandidate {
    /// 1-based position in the extraction.
    #[serde(default)]
    pub id: usize,
    pub raw_text: String,
    pub category: Category,
    pub urgency: Urgency,
    #[serde(default)]
    pub rationale: String,
    /// The phrase that decided the urgency tier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_cue: Option<String>,
}

impl fmt::Display for TaskCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, text='{}', category={}, urgency={})",
            self.id, self.raw_text, self.category, self.urgency
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total_tasks: usize,
    pub urgent: usize,
    pub soon: usize,
    pub normal: usize,
    pub low: usize,
}

impl ExtractionSummary {
    pub fn from_tasks(tasks: &[TaskCandidate]) -> Self {
        let count = |u: Urgency| tasks.iter().filter(|t| t.urgency == u).count();
        Self {
            total_tasks: tasks.len(),
            urgent: count(Urgency::Urgent),
            soon: count(Urgency::Soon),
            normal: count(Urgency::Normal),
            low: count(Urgency::Low),
        }
    }
}

/// Output of the extractor, and the payload the scheduler accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default)]
    pub tasks: Vec<TaskCandidate>,
    #[serde(default)]
    pub summary: ExtractionSummary,
}

impl Extraction {
    pub fn new(tasks: Vec<TaskCandidate>) -> Self {
        let summary = ExtractionSummary::from_tasks(&tasks);
        Self { tasks, summary }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlot {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    tasks: Vec<TaskCandidate>,
}

impl DaySlot {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            date: None,
            label: None,
            tasks: Vec::new(),
        }
    }

    pub(crate) fn set_calendar(&mut self, date: NaiveDate, label: String) {
        self.date = Some(date);
        self.label = Some(label);
    }

    pub(crate) fn push(&mut self, task: TaskCandidate) {
        self.tasks.push(task);
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
    pub fn tasks(&self) -> &[TaskCandidate] {
        &self.tasks
    }
    pub fn load(&self) -> usize {
        self.tasks.len()
    }
}

/// Seven ordered day-slots. Built once per scheduling call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    days: Vec<DaySlot>,
}

impl WeeklyPlan {
    pub(crate) fn from_days(days: Vec<DaySlot>) -> Self {
        let start_date = days.first().and_then(|d| d.date);
        let end_date = days.last().and_then(|d| d.date);
        Self {
            start_date,
            end_date,
            days,
        }
    }

    pub fn days(&self) -> &[DaySlot] {
        &self.days
    }

    /// Day by 1-based index.
    pub fn day(&self, index: usize) -> Option<&DaySlot> {
        index.checked_sub(1).and_then(|i| self.days.get(i))
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn total_tasks(&self) -> usize {
        self.days.iter().map(DaySlot::load).sum()
    }

    /// 1-based day index holding the task with `id`, if any.
    pub fn day_of(&self, id: usize) -> Option<usize> {
        self.days
            .iter()
            .find(|d| d.tasks.iter().any(|t| t.id == id))
            .map(|d| d.index)
    }
}
