use crate::modules::attendance::core::records::{AttendanceRecord, LeaveRecord};
use crate::shared::core::period::ReportingPeriod;
use async_trait::async_trait;

#[async_trait]
pub trait AttendanceRecordStore: Send + Sync {
    async fn list_for_period(
        &self,
        employee_id: &str,
        period: ReportingPeriod,
    ) -> anyhow::Result<Vec<AttendanceRecord>>;
}

/// Returns every leave of the employee; period filtering is the reconciler's job.
#[async_trait]
pub trait LeaveRecordStore: Send + Sync {
    async fn list_for_employee(&self, employee_id: &str) -> anyhow::Result<Vec<LeaveRecord>>;
}
