
use crate::core::models::TaskCandidate;
use crate::core::types::{Category, DayWindow, Urgency};
use crate::scheduler::placement::{PlacementObserver, PlacementTier};
use crate::scheduler::{SchedulerSettings, UrgencyWindows};
use std::cell::RefCell;

pub(super) fn task(id: usize, urgency: Urgency) -> TaskCandidate {
    TaskCandidate {
        id,
        raw_text: format!("task {id}"),
        category: Category::Other,
        urgency,
        rationale: String::new(),
        due_cue: None,
    }
}

pub(super) fn tasks(urgencies: &[Urgency]) -> Vec<TaskCandidate> {
    urgencies
        .iter()
        .enumerate()
        .map(|(i, u)| task(i + 1, *u))
        .collect()
}

pub(super) fn window(s: &str) -> DayWindow {
    DayWindow::try_from_str(s).unwrap()
}

pub(super) fn settings(cap: usize, urgent: &str, soon: &str, normal: &str, low: &str) -> SchedulerSettings {
    SchedulerSettings {
        max_tasks_per_day: cap,
        windows: UrgencyWindows {
            urgent: window(urgent),
            soon: window(soon),
            normal: window(normal),
            low: window(low),
        },
    }
}

#[derive(Default)]
pub(super) struct RecordingObserver {
    pub placed: RefCell<Vec<(usize, usize, PlacementTier)>>,
}

impl PlacementObserver for RecordingObserver {
    fn task_placed(&self, task: &TaskCandidate, day: usize, tier: PlacementTier) {
        self.placed.borrow_mut().push((task.id, day, tier));
    }
}
