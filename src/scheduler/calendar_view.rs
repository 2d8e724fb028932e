use crate::core::models::DaySlot;
use crate::core::types::DAYS_IN_PLAN;
use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Days, NaiveDate};

/// The day-slots of one plan. Dated only when a start date is given.
#[derive(Debug, Clone, Default)]
pub struct CalendarView {
    start: Option<NaiveDate>,
}

impl CalendarView {
    /// Default: 7 undated days.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_date(mut self, start: Option<NaiveDate>) -> Self {
        self.start = start;
        self
    }

    /// Rejects a start date whose week runs past the last representable date.
    pub fn check_start(start: NaiveDate) -> Result<()> {
        match start.checked_add_days(Days::new(DAYS_IN_PLAN as u64 - 1)) {
            Some(_) => Ok(()),
            None => Err(Error::configuration(format!(
                "Plan start date {start} leaves no room for a {DAYS_IN_PLAN}-day plan."
            ))),
        }
    }

    /// Ordered list of planning dates; empty when undated. Stops early
    /// instead of overflowing at the end of the calendar.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self.start {
            Some(start) => (0..DAYS_IN_PLAN as u64)
                .map_while(|offset| start.checked_add_days(Days::new(offset)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Empty slots, index 1..=7, with date and label when dated.
    pub fn slots(&self) -> Vec<DaySlot> {
        let dates = self.dates();
        (1..=DAYS_IN_PLAN)
            .map(|index| {
                let mut slot = DaySlot::new(index);
                if let (Some(start), Some(date)) = (self.start, dates.get(index - 1)) {
                    slot.set_calendar(*date, date.plan_label(start));
                }
                slot
            })
            .collect()
    }
}
