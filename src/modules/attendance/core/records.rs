// Attendance and leave records as read from their stores, and the merged day view
// produced by reconciliation.

use crate::shared::core::geo::round_to_cents;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Half-Day")]
    HalfDay,
    #[serde(rename = "Work-from-Home")]
    WorkFromHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    Present,
    Absent,
    Leave,
    #[serde(rename = "Half-Day")]
    HalfDay,
    #[serde(rename = "Work-from-Home")]
    WorkFromHome,
}

impl From<AttendanceStatus> for DayStatus {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => DayStatus::Present,
            AttendanceStatus::Absent => DayStatus::Absent,
            AttendanceStatus::HalfDay => DayStatus::HalfDay,
            AttendanceStatus::WorkFromHome => DayStatus::WorkFromHome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub hours_worked: Option<f64>,
}

impl AttendanceRecord {
    /// Reported hours, or the check-in to check-out span when the feed left it out.
    pub fn effective_hours(&self) -> Option<f64> {
        if self.hours_worked.is_some() {
            return self.hours_worked;
        }
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                let minutes = (check_out - check_in).num_minutes() as f64;
                Some(round_to_cents(minutes / 60.0))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidRecordError {
    #[error("leave for {employee_id} ends on {end_date}, before it starts on {start_date}")]
    LeaveEndsBeforeStart {
        employee_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("attendance for {employee_id} on {date} reports {hours} hours worked")]
    NegativeHoursWorked {
        employee_id: String,
        date: NaiveDate,
        hours: f64,
    },
}

impl LeaveRecord {
    pub fn validate(&self) -> Result<(), InvalidRecordError> {
        if self.end_date < self.start_date {
            return Err(InvalidRecordError::LeaveEndsBeforeStart {
                employee_id: self.employee_id.clone(),
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }
}

impl AttendanceRecord {
    pub fn validate(&self) -> Result<(), InvalidRecordError> {
        match self.hours_worked {
            Some(hours) if hours < 0.0 || !hours.is_finite() => {
                Err(InvalidRecordError::NegativeHoursWorked {
                    employee_id: self.employee_id.clone(),
                    date: self.date,
                    hours,
                })
            }
            _ => Ok(()),
        }
    }
}

/// One row of the reconciled timeline. Exactly one per date that has either source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedDayRecord {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub hours_worked: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
}

impl MergedDayRecord {
    pub fn leave_day(date: NaiveDate, leave_type: &str) -> Self {
        Self {
            date,
            status: DayStatus::Leave,
            check_in: None,
            check_out: None,
            hours_worked: None,
            leave_type: Some(leave_type.to_string()),
        }
    }
}

impl From<&AttendanceRecord> for MergedDayRecord {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.date,
            status: record.status.into(),
            check_in: record.check_in,
            check_out: record.check_out,
            hours_worked: record.effective_hours(),
            leave_type: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriodStats {
    pub total_days: u32,
    pub present: u32,
    pub absent: u32,
    pub leave: u32,
    pub half_day: u32,
    pub work_from_home: u32,
}

impl ReportingPeriodStats {
    pub fn tally(records: &[MergedDayRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.total_days += 1;
            match record.status {
                DayStatus::Present => stats.present += 1,
                DayStatus::Absent => stats.absent += 1,
                DayStatus::Leave => stats.leave += 1,
                DayStatus::HalfDay => stats.half_day += 1,
                DayStatus::WorkFromHome => stats.work_from_home += 1,
            }
            stats
        })
    }

    /// Present days over all recorded days, as a percentage with 2 decimals.
    pub fn attendance_percentage(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        round_to_cents(f64::from(self.present) / f64::from(self.total_days) * 100.0)
    }
}
