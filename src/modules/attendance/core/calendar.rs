use crate::shared::core::period::{InvalidPeriod, ReportingPeriod};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

pub const WEEKS_PER_GRID: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_current_month: bool,
}

pub type Week = [CalendarCell; DAYS_PER_WEEK];

/// Month view for navigation. Always 6 Sunday-first weeks, padded with the adjacent
/// months' days so the grid keeps the same height for every month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub period: ReportingPeriod,
    pub weeks: [Week; WEEKS_PER_GRID],
}

impl CalendarGrid {
    pub fn build(period: ReportingPeriod) -> Self {
        let first = period.first_day();
        let leading = u64::from(first.weekday().num_days_from_sunday());
        let start = first - Days::new(leading);

        let weeks = std::array::from_fn(|week| {
            std::array::from_fn(|weekday| {
                let date = start + Days::new((week * DAYS_PER_WEEK + weekday) as u64);
                CalendarCell {
                    date,
                    day: date.day(),
                    is_current_month: period.contains(date),
                }
            })
        });

        Self { period, weeks }
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    pub fn previous(&self) -> Result<Self, InvalidPeriod> {
        self.period.previous().map(Self::build)
    }

    pub fn next(&self) -> Result<Self, InvalidPeriod> {
        self.period.next().map(Self::build)
    }
}
