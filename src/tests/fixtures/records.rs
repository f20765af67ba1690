// Builders for attendance and leave records as the stores would hand them over.

use crate::modules::attendance::core::records::{
    AttendanceRecord, AttendanceStatus, LeaveRecord, LeaveStatus,
};
use chrono::{NaiveDate, NaiveTime};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn time(hh_mm: &str) -> NaiveTime {
    NaiveTime::parse_from_str(hh_mm, "%H:%M").unwrap()
}

pub struct AttendanceRecordBuilder {
    inner: AttendanceRecord,
}

impl AttendanceRecordBuilder {
    /// A regular 09:00 to 17:30 office day.
    pub fn present(date: NaiveDate) -> Self {
        Self {
            inner: AttendanceRecord {
                employee_id: "emp-0001".to_string(),
                date,
                status: AttendanceStatus::Present,
                check_in: Some(time("09:00")),
                check_out: Some(time("17:30")),
                hours_worked: Some(8.5),
            },
        }
    }

    pub fn absent(date: NaiveDate) -> Self {
        Self {
            inner: AttendanceRecord {
                employee_id: "emp-0001".to_string(),
                date,
                status: AttendanceStatus::Absent,
                check_in: None,
                check_out: None,
                hours_worked: None,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn status(mut self, v: AttendanceStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn check_in(mut self, v: &str) -> Self {
        self.inner.check_in = Some(time(v));
        self
    }

    pub fn check_out(mut self, v: &str) -> Self {
        self.inner.check_out = Some(time(v));
        self
    }

    pub fn without_check_out(mut self) -> Self {
        self.inner.check_out = None;
        self
    }

    pub fn hours_worked(mut self, v: Option<f64>) -> Self {
        self.inner.hours_worked = v;
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.inner
    }
}

pub struct LeaveRecordBuilder {
    inner: LeaveRecord,
}

impl LeaveRecordBuilder {
    pub fn approved(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            inner: LeaveRecord {
                employee_id: "emp-0001".to_string(),
                leave_type: "sick".to_string(),
                start_date,
                end_date,
                status: LeaveStatus::Approved,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn leave_type(mut self, v: impl Into<String>) -> Self {
        self.inner.leave_type = v.into();
        self
    }

    pub fn status(mut self, v: LeaveStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> LeaveRecord {
        self.inner
    }
}
