use crate::modules::attendance::core::records::InvalidRecordError;
use crate::modules::attendance::use_cases::reconcile_period::queries_port::{
    AttendanceRecordStore, LeaveRecordStore,
};
use crate::modules::attendance::use_cases::reconcile_period::reconcile::{
    Reconciliation, reconcile,
};
use crate::shared::core::period::ReportingPeriod;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecordError),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub struct ReconcilePeriodHandler<TAttendance, TLeaves>
where
    TAttendance: AttendanceRecordStore + 'static,
    TLeaves: LeaveRecordStore + 'static,
{
    attendance: Arc<TAttendance>,
    leaves: Arc<TLeaves>,
}

impl<TAttendance, TLeaves> ReconcilePeriodHandler<TAttendance, TLeaves>
where
    TAttendance: AttendanceRecordStore + 'static,
    TLeaves: LeaveRecordStore + 'static,
{
    pub fn new(attendance: Arc<TAttendance>, leaves: Arc<TLeaves>) -> Self {
        Self { attendance, leaves }
    }

    pub async fn handle(
        &self,
        employee_id: &str,
        period: ReportingPeriod,
    ) -> Result<Reconciliation, ReconcileError> {
        let attendance = self
            .attendance
            .list_for_period(employee_id, period)
            .await
            .inspect_err(|e| tracing::error!(error = %e, employee_id, "attendance store failed"))?;
        let leaves = self
            .leaves
            .list_for_employee(employee_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, employee_id, "leave store failed"))?;

        let reconciliation = reconcile(period, &attendance, &leaves).inspect_err(|e| {
            tracing::warn!(error = %e, employee_id, "refusing to reconcile invalid records")
        })?;

        tracing::info!(
            employee_id,
            year = period.year(),
            month = period.month(),
            total_days = reconciliation.stats.total_days,
            present = reconciliation.stats.present,
            absent = reconciliation.stats.absent,
            leave = reconciliation.stats.leave,
            "reconciled reporting period"
        );
        Ok(reconciliation)
    }
}
