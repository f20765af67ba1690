use crate::modules::attendance::core::records::{AttendanceRecord, LeaveRecord};
use crate::modules::attendance::use_cases::reconcile_period::queries_port::{
    AttendanceRecordStore, LeaveRecordStore,
};
use crate::shared::core::period::ReportingPeriod;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Attendance and leave stores backed by process memory.
#[derive(Default)]
pub struct InMemoryRecords {
    attendance: RwLock<Vec<AttendanceRecord>>,
    leaves: RwLock<Vec<LeaveRecord>>,
    offline: bool,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn insert_attendance(&self, record: AttendanceRecord) {
        self.attendance.write().await.push(record);
    }

    pub async fn insert_leave(&self, record: LeaveRecord) {
        self.leaves.write().await.push(record);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.offline {
            anyhow::bail!("Record store offline");
        }
        Ok(())
    }
}

#[async_trait]
impl AttendanceRecordStore for InMemoryRecords {
    async fn list_for_period(
        &self,
        employee_id: &str,
        period: ReportingPeriod,
    ) -> anyhow::Result<Vec<AttendanceRecord>> {
        self.ensure_online()?;
        Ok(self
            .attendance
            .read()
            .await
            .iter()
            .filter(|r| r.employee_id == employee_id && period.contains(r.date))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LeaveRecordStore for InMemoryRecords {
    async fn list_for_employee(&self, employee_id: &str) -> anyhow::Result<Vec<LeaveRecord>> {
        self.ensure_online()?;
        Ok(self
            .leaves
            .read()
            .await
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
