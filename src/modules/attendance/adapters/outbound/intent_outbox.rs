use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate intents into outbox rows and enqueue them.
/// `ledger_version` is the stream version produced by the append that raised them.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    ledger_version: i64,
    topic: &str,
    intents: Vec<AttendanceIntent>,
) -> Result<(), OutboxError> {
    for intent in intents {
        match intent {
            AttendanceIntent::RequestRemoteWorkApproval { payload } => {
                let occurred_at = payload.requested_at;
                let payload = serde_json::to_value(payload)
                    .map_err(|e| OutboxError::Serialization(e.to_string()))?;
                outbox
                    .enqueue(OutboxRow {
                        topic: topic.to_string(),
                        intent_type: "RemoteWorkApprovalRequested".to_string(),
                        stream_id: stream_id.to_string(),
                        stream_version: ledger_version,
                        occurred_at,
                        payload,
                    })
                    .await?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod dispatch_intents_tests {
    use super::*;
    use crate::modules::attendance::core::entries::PunchDirection;
    use crate::modules::attendance::core::intents::RemoteWorkApprovalRequested;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn remote_intent() -> AttendanceIntent {
        AttendanceIntent::RequestRemoteWorkApproval {
            payload: RemoteWorkApprovalRequested {
                entry_id: "entry-0001".into(),
                employee_id: "emp-0001".into(),
                direction: PunchDirection::Out,
                distance_meters: 150.0,
                justification: "client site visit".into(),
                requested_at: Utc.with_ymd_and_hms(2025, 11, 8, 17, 30, 0).unwrap(),
            },
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_one_row_per_intent() {
        let outbox = InMemoryDomainOutbox::new();
        dispatch_intents(&outbox, "Punches-emp-0001", 4, "attendance.v1", vec![remote_intent()])
            .await
            .unwrap();
        let rows = outbox.pending().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].intent_type, "RemoteWorkApprovalRequested");
        assert_eq!(rows[0].stream_version, 4);
        assert_eq!(rows[0].payload["justification"], "client site visit");
        assert_eq!(rows[0].payload["direction"], "out");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_do_nothing_without_intents() {
        let outbox = InMemoryDomainOutbox::new();
        dispatch_intents(&outbox, "Punches-emp-0001", 1, "attendance.v1", Vec::new())
            .await
            .unwrap();
        assert!(outbox.pending().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_dispatch_the_same_append_twice() {
        let outbox = InMemoryDomainOutbox::new();
        dispatch_intents(&outbox, "Punches-emp-0001", 2, "attendance.v1", vec![remote_intent()])
            .await
            .unwrap();
        let again =
            dispatch_intents(&outbox, "Punches-emp-0001", 2, "attendance.v1", vec![remote_intent()])
                .await;
        assert!(matches!(again, Err(OutboxError::Duplicate { .. })));
    }
}
