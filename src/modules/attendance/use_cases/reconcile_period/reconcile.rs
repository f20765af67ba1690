// Merge attendance and approved leave into one timeline for a reporting period.
//
// Two phases over immutable inputs:
// 1. expand approved leaves into one leave-day per date inside the period;
// 2. overlay attendance records by date. Attendance always wins: it records what
//    actually happened on a day the leave nominally covered.

use crate::modules::attendance::core::records::{
    AttendanceRecord, InvalidRecordError, LeaveRecord, LeaveStatus, MergedDayRecord,
    ReportingPeriodStats,
};
use crate::shared::core::period::ReportingPeriod;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub period: ReportingPeriod,
    /// Most recent day first.
    pub records: Vec<MergedDayRecord>,
    pub stats: ReportingPeriodStats,
}

pub fn reconcile(
    period: ReportingPeriod,
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
) -> Result<Reconciliation, InvalidRecordError> {
    attendance.iter().try_for_each(AttendanceRecord::validate)?;
    leaves.iter().try_for_each(LeaveRecord::validate)?;

    let mut days = expand_leaves(period, leaves);
    days.extend(
        attendance
            .iter()
            .filter(|record| period.contains(record.date))
            .map(|record| (record.date, MergedDayRecord::from(record))),
    );

    let records: Vec<MergedDayRecord> = days.into_values().rev().collect();
    let stats = ReportingPeriodStats::tally(&records);
    Ok(Reconciliation {
        period,
        records,
        stats,
    })
}

fn expand_leaves(
    period: ReportingPeriod,
    leaves: &[LeaveRecord],
) -> BTreeMap<NaiveDate, MergedDayRecord> {
    leaves
        .iter()
        .filter(|leave| leave.status == LeaveStatus::Approved)
        .filter_map(|leave| {
            period
                .clip(leave.start_date, leave.end_date)
                .map(|(start, end)| (leave, start, end))
        })
        .flat_map(|(leave, start, end)| {
            start
                .iter_days()
                .take_while(move |day| *day <= end)
                .map(move |day| (day, MergedDayRecord::leave_day(day, &leave.leave_type)))
        })
        .collect()
}
