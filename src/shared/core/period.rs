use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPeriod {
    #[error("month must be between 1 and 12, got {0}")]
    Month(u32),

    #[error("year must be between 1 and 9999, got {0}")]
    Year(i32),
}

/// A calendar month. The unit of reconciliation, statistics and calendar navigation.
///
/// The first and last day are resolved once at construction so date arithmetic
/// downstream never has to deal with month or year rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReportingPeriod {
    year: i32,
    month: u32,
    #[serde(skip)]
    first_day: NaiveDate,
    #[serde(skip)]
    last_day: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidPeriod> {
        if !(1..=12).contains(&month) {
            return Err(InvalidPeriod::Month(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(InvalidPeriod::Year(year));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or(InvalidPeriod::Month(month))?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(InvalidPeriod::Year(year))?;
        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    /// Clip an inclusive date span to this period. `None` when they do not meet.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let start = start.max(self.first_day);
        let end = end.min(self.last_day);
        (start <= end).then_some((start, end))
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last_day;
        self.first_day.iter_days().take_while(move |d| *d <= last)
    }

    pub fn previous(&self) -> Result<Self, InvalidPeriod> {
        match self.month {
            1 => Self::new(self.year - 1, 12),
            m => Self::new(self.year, m - 1),
        }
    }

    pub fn next(&self) -> Result<Self, InvalidPeriod> {
        match self.month {
            12 => Self::new(self.year + 1, 1),
            m => Self::new(self.year, m + 1),
        }
    }
}
