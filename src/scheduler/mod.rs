use crate::core::models::{DaySlot, TaskCandidate, WeeklyPlan};
use crate::core::types::{DayWindow, Urgency};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::calendar_view::CalendarView;
use crate::scheduler::ordering::placement_order;
use crate::scheduler::placement::{
    NoopObserver, PlacementObserver, PlacementStrategy, PlacementTier, placement_cascade,
};
use chrono::NaiveDate;

mod calendar_view;
mod ordering;
pub mod placement;
#[cfg(test)]
mod tests;

/// Permitted days per urgency tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyWindows {
    pub urgent: DayWindow,
    pub soon: DayWindow,
    pub normal: DayWindow,
    pub low: DayWindow,
}

impl UrgencyWindows {
    pub fn window(&self, urgency: Urgency) -> &DayWindow {
        match urgency {
            Urgency::Urgent => &self.urgent,
            Urgency::Soon => &self.soon,
            Urgency::Normal => &self.normal,
            Urgency::Low => &self.low,
        }
    }
}

impl Default for UrgencyWindows {
    fn default() -> Self {
        Self {
            urgent: DayWindow::from_days([1, 2]).unwrap_or_default(),
            soon: DayWindow::from_days(1..=4).unwrap_or_default(),
            normal: DayWindow::from_days(2..=7).unwrap_or_default(),
            low: DayWindow::whole_week(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerSettings {
    /// Zero is allowed: every task then goes to the least-loaded day.
    pub max_tasks_per_day: usize,
    pub windows: UrgencyWindows,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            max_tasks_per_day: 3,
            windows: UrgencyWindows::default(),
        }
    }
}

/// Writes every placement to the session log.
pub struct LoggerObserver {
    logger: Logger,
}

impl LoggerObserver {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl PlacementObserver for LoggerObserver {
    fn task_placed(&self, task: &TaskCandidate, day: usize, tier: PlacementTier) {
        match tier {
            PlacementTier::Window => self.logger.info(
                format!("Task with id {} placed on day {day}", task.id),
                LogTarget::FileOnly,
            ),
            PlacementTier::Week => self.logger.info(
                format!(
                    "Window for {} task with id {} is full; placed on day {day}",
                    task.urgency, task.id
                ),
                LogTarget::FileOnly,
            ),
            PlacementTier::LeastLoaded => self.logger.warn(
                format!(
                    "Week is at capacity; task with id {} placed on least-loaded day {day}",
                    task.id
                ),
                LogTarget::FileOnly,
            ),
        }
    }
}

pub struct WeeklyPlanner<'a> {
    settings: &'a SchedulerSettings,
    start_date: Option<NaiveDate>,
    cascade: Vec<Box<dyn PlacementStrategy>>,
    observer: &'a dyn PlacementObserver,
}

impl<'a> WeeklyPlanner<'a> {
    pub fn new(settings: &'a SchedulerSettings) -> Self {
        Self {
            settings,
            start_date: None,
            cascade: placement_cascade(),
            observer: &NoopObserver,
        }
    }

    pub fn with_start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn PlacementObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Order by tier → place each task through the cascade → freeze the plan.
    pub fn build(&self, tasks: &[TaskCandidate]) -> WeeklyPlan {
        let mut days = CalendarView::new()
            .with_start_date(self.start_date)
            .slots();

        for task in placement_order(tasks) {
            let loads: Vec<usize> = days.iter().map(DaySlot::load).collect();
            let (day, tier) = self.place(task, &loads);
            self.observer.task_placed(task, day, tier);
            days[day - 1].push(task.clone());
        }

        WeeklyPlan::from_days(days)
    }

    fn place(&self, task: &TaskCandidate, loads: &[usize]) -> (usize, PlacementTier) {
        let window = self.settings.windows.window(task.urgency);
        let cap = self.settings.max_tasks_per_day;
        self.cascade
            .iter()
            .find_map(|strategy| {
                strategy
                    .select_day(loads, window, cap)
                    .filter(|day| (1..=loads.len()).contains(day))
                    .map(|day| (day, strategy.tier()))
            })
            // least-loaded always answers for a non-empty week
            .unwrap_or((1, PlacementTier::LeastLoaded))
    }
}

/// A dated plan needs all seven of its days on the calendar.
pub fn check_start_date(start_date: Option<NaiveDate>) -> Result<()> {
    start_date.map_or(Ok(()), CalendarView::check_start)
}

/// Pure entry point: undated plan, no observer.
pub fn build_plan(tasks: &[TaskCandidate], settings: &SchedulerSettings) -> WeeklyPlan {
    WeeklyPlanner::new(settings).build(tasks)
}

/// Same as [`build_plan`] but records every placement in the log.
pub fn build_plan_logged(
    tasks: &[TaskCandidate],
    settings: &SchedulerSettings,
    start_date: Option<NaiveDate>,
    logger: &Logger,
) -> WeeklyPlan {
    logger.info("Starting scheduling...", LogTarget::FileOnly);
    let observer = LoggerObserver::new(logger.clone());
    let plan = WeeklyPlanner::new(settings)
        .with_start_date(start_date)
        .with_observer(&observer)
        .build(tasks);
    logger.info(
        format!("Finished scheduling {} task(s).", plan.total_tasks()),
        LogTarget::FileOnly,
    );
    plan
}
