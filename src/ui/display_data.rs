use crate::core::models::{DaySlot, TaskCandidate, WeeklyPlan};
use crate::core::types::Urgency;
use crate::ui::ansi::{FG_BLUE, FG_GREEN, FG_RED, FG_YELLOW, STYLE_RESET};

#[derive(Debug, Clone)]
pub struct PlanSection {
    pub title: String,
    pub rows: Vec<Vec<String>>, // placement order
}

#[derive(Debug, Clone)]
pub struct DisplayDataBuilder {
    colored: bool,
}

impl Default for DisplayDataBuilder {
    fn default() -> Self {
        Self { colored: true }
    }
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// No ANSI styling in any cell (pipes, files, tests).
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn task_rows(&self, tasks: &[TaskCandidate]) -> Vec<Vec<String>> {
        tasks
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.raw_text.clone(),
                    t.category.to_string(),
                    self.paint_urgency(t.urgency),
                    t.due_cue.clone().unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect()
    }

    pub fn rationale_rows(&self, tasks: &[TaskCandidate]) -> Vec<Vec<String>> {
        tasks
            .iter()
            .map(|t| vec![t.id.to_string(), t.rationale.clone()])
            .collect()
    }

    pub fn build_plan_sections(&self, plan: &WeeklyPlan) -> Vec<PlanSection> {
        plan.days()
            .iter()
            .map(|day| PlanSection {
                title: Self::day_title(day),
                rows: day
                    .tasks()
                    .iter()
                    .map(|t| {
                        vec![
                            format!("T.ID: {}", t.id),
                            t.raw_text.clone(),
                            t.category.to_string(),
                            self.paint_urgency(t.urgency),
                        ]
                    })
                    .collect(),
            })
            .collect()
    }

    fn day_title(day: &DaySlot) -> String {
        match (day.label(), day.date()) {
            (Some(label), Some(date)) => format!(
                "DAY {}: {} ({})",
                day.index(),
                label,
                date.format("%Y-%m-%d")
            ),
            _ => format!("DAY {}", day.index()),
        }
    }

    fn paint_urgency(&self, urgency: Urgency) -> String {
        if !self.colored {
            return urgency.to_string();
        }
        let color = match urgency {
            Urgency::Urgent => FG_RED,
            Urgency::Soon => FG_YELLOW,
            Urgency::Normal => FG_GREEN,
            Urgency::Low => FG_BLUE,
        };
        format!("{color}{urgency}{STYLE_RESET}")
    }
}
