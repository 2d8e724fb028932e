use crate::core::models::TaskCandidate;
use crate::core::types::DayWindow;
use strum_macros::Display;

/// Which step of the fallback cascade placed a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PlacementTier {
    Window,
    Week,
    LeastLoaded,
}

/// Observer to capture placements (e.g., for logging).
pub trait PlacementObserver {
    fn task_placed(&self, task: &TaskCandidate, day: usize, tier: PlacementTier);
}

pub struct NoopObserver;

impl PlacementObserver for NoopObserver {
    fn task_placed(&self, _task: &TaskCandidate, _day: usize, _tier: PlacementTier) {}
}

/// One step of the cascade. `loads[i]` is the current task count of day `i + 1`.
pub trait PlacementStrategy {
    fn tier(&self) -> PlacementTier;

    /// 1-based day to place on, or `None` to defer to the next strategy.
    fn select_day(&self, loads: &[usize], window: &DayWindow, cap: usize) -> Option<usize>;
}

/// Earliest in-window day below the cap.
pub struct WindowFirstFit;

impl PlacementStrategy for WindowFirstFit {
    fn tier(&self) -> PlacementTier {
        PlacementTier::Window
    }

    fn select_day(&self, loads: &[usize], window: &DayWindow, cap: usize) -> Option<usize> {
        window
            .days()
            .iter()
            .copied()
            .find(|&day| loads.get(day - 1).is_some_and(|&load| load < cap))
    }
}

/// Earliest day of the whole week below the cap.
pub struct WeekFirstFit;

impl PlacementStrategy for WeekFirstFit {
    fn tier(&self) -> PlacementTier {
        PlacementTier::Week
    }

    fn select_day(&self, loads: &[usize], _window: &DayWindow, cap: usize) -> Option<usize> {
        loads.iter().position(|&load| load < cap).map(|i| i + 1)
    }
}

/// Day with the fewest tasks, earliest on ties. Ignores the cap, so it
/// answers for any non-empty week.
pub struct LeastLoaded;

impl PlacementStrategy for LeastLoaded {
    fn tier(&self) -> PlacementTier {
        PlacementTier::LeastLoaded
    }

    fn select_day(&self, loads: &[usize], _window: &DayWindow, _cap: usize) -> Option<usize> {
        loads
            .iter()
            .enumerate()
            .min_by_key(|&(_, load)| *load)
            .map(|(i, _)| i + 1)
    }
}

/// Window → whole week → least loaded.
pub fn placement_cascade() -> Vec<Box<dyn PlacementStrategy>> {
    vec![
        Box::new(WindowFirstFit),
        Box::new(WeekFirstFit),
        Box::new(LeastLoaded),
    ]
}
