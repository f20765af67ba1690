// Pure decision for a punch attempt. No I/O: the caller supplies the folded state.
//
// Checks run in a fixed order and the first failure wins:
// photo, location, geofence (with justification), then the entry is built with the
// direction that alternates from the last recorded punch.

use crate::modules::attendance::core::entries::PunchLedgerEntry;
use crate::modules::attendance::core::geofence::GeofencePolicy;
use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::modules::attendance::core::state::PunchState;
use crate::modules::attendance::use_cases::punch::command::PunchAttempt;
use crate::modules::attendance::use_cases::punch::decision::{Decision, PunchRejection};
use uuid::Uuid;

pub fn decide_punch(state: &PunchState, attempt: PunchAttempt, policy: &GeofencePolicy) -> Decision {
    match validate(state, attempt, policy) {
        Ok(entry) => Decision::Accepted {
            intents: AttendanceIntent::for_entry(&entry),
            entry,
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn validate(
    state: &PunchState,
    attempt: PunchAttempt,
    policy: &GeofencePolicy,
) -> Result<PunchLedgerEntry, PunchRejection> {
    if attempt.photo.as_ref().is_none_or(|p| p.is_empty()) {
        return Err(PunchRejection::MissingCapture);
    }
    let location = attempt.location.ok_or(PunchRejection::MissingLocation)?;

    let classification = policy.classify(&location);
    let remote_justification = if classification.within_geofence {
        None
    } else {
        match attempt.remote_justification.as_deref().map(str::trim) {
            None => {
                return Err(PunchRejection::RemoteApprovalRequired {
                    distance_meters: classification.distance_meters,
                });
            }
            Some("") => return Err(PunchRejection::EmptyJustification),
            Some(reason) => Some(reason.to_string()),
        }
    };

    Ok(PunchLedgerEntry {
        entry_id: Uuid::now_v7().to_string(),
        employee_id: attempt.employee_id,
        direction: state.next_direction(),
        timestamp: attempt.captured_at,
        distance_meters: classification.distance_meters,
        was_remote_approved: !classification.within_geofence,
        remote_justification,
    })
}

#[cfg(test)]
mod punch_decide_tests {
    use super::*;
    use crate::modules::attendance::core::entries::PunchDirection;
    use crate::modules::attendance::core::evolve::evolve;
    use crate::shared::infrastructure::capture::PhotoPayload;
    use crate::tests::fixtures::commands::punch_attempt::{PunchAttemptBuilder, meters_from_office};
    use crate::tests::fixtures::policy::office_policy;
    use rstest::{fixture, rstest};

    #[fixture]
    fn policy() -> GeofencePolicy {
        office_policy(100.0)
    }

    fn accepted(decision: Decision) -> (PunchLedgerEntry, Vec<AttendanceIntent>) {
        match decision {
            Decision::Accepted { entry, intents } => (entry, intents),
            Decision::Rejected { reason } => panic!("expected acceptance, got {reason:?}"),
        }
    }

    fn rejected(decision: Decision) -> PunchRejection {
        match decision {
            Decision::Rejected { reason } => reason,
            Decision::Accepted { entry, .. } => panic!("expected rejection, got {entry:?}"),
        }
    }

    #[rstest]
    fn it_should_punch_in_first(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new().build();
        let captured_at = attempt.captured_at;
        let (entry, intents) = accepted(decide_punch(&PunchState::NeverPunched, attempt, &policy));
        assert_eq!(entry.direction, PunchDirection::In);
        assert_eq!(entry.employee_id, "emp-0001");
        assert_eq!(entry.timestamp, captured_at);
        assert!(!entry.was_remote_approved);
        assert_eq!(entry.remote_justification, None);
        assert!(intents.is_empty());
    }

    #[rstest]
    fn it_should_strictly_alternate_directions(policy: GeofencePolicy) {
        let mut state = PunchState::NeverPunched;
        let mut directions = Vec::new();
        for _ in 0..5 {
            let (entry, _) = accepted(decide_punch(&state, PunchAttemptBuilder::new().build(), &policy));
            directions.push(entry.direction);
            state = evolve(state, &entry);
        }
        assert_eq!(
            directions,
            vec![
                PunchDirection::In,
                PunchDirection::Out,
                PunchDirection::In,
                PunchDirection::Out,
                PunchDirection::In,
            ]
        );
    }

    #[rstest]
    fn it_should_reject_a_missing_photo_before_anything_else(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new().photo(None).location(None).build();
        assert_eq!(
            rejected(decide_punch(&PunchState::NeverPunched, attempt, &policy)),
            PunchRejection::MissingCapture
        );
    }

    #[rstest]
    fn it_should_treat_an_empty_photo_as_missing(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new()
            .photo(Some(PhotoPayload::new(Vec::new())))
            .build();
        assert_eq!(
            rejected(decide_punch(&PunchState::NeverPunched, attempt, &policy)),
            PunchRejection::MissingCapture
        );
    }

    #[rstest]
    fn it_should_reject_a_missing_location(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new().location(None).build();
        assert_eq!(
            rejected(decide_punch(&PunchState::NeverPunched, attempt, &policy)),
            PunchRejection::MissingLocation
        );
    }

    #[rstest]
    fn it_should_require_a_justification_outside_the_geofence(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new()
            .location(Some(meters_from_office(150.0)))
            .build();
        assert_eq!(
            rejected(decide_punch(&PunchState::NeverPunched, attempt, &policy)),
            PunchRejection::RemoteApprovalRequired {
                distance_meters: 150.0
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn it_should_reject_a_blank_justification(policy: GeofencePolicy, #[case] justification: &str) {
        let attempt = PunchAttemptBuilder::new()
            .location(Some(meters_from_office(150.0)))
            .remote_justification(Some(justification))
            .build();
        assert_eq!(
            rejected(decide_punch(&PunchState::NeverPunched, attempt, &policy)),
            PunchRejection::EmptyJustification
        );
    }

    #[rstest]
    fn it_should_accept_a_justified_remote_punch(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new()
            .location(Some(meters_from_office(150.0)))
            .remote_justification(Some("  client site visit "))
            .build();
        let (entry, intents) = accepted(decide_punch(&PunchState::NeverPunched, attempt, &policy));
        assert!(entry.was_remote_approved);
        assert_eq!(entry.distance_meters, 150.0);
        assert_eq!(entry.remote_justification.as_deref(), Some("client site visit"));
        assert_eq!(intents.len(), 1);
    }

    #[rstest]
    fn it_should_ignore_a_justification_inside_the_geofence(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new()
            .location(Some(meters_from_office(40.0)))
            .remote_justification(Some("   "))
            .build();
        let (entry, intents) = accepted(decide_punch(&PunchState::NeverPunched, attempt, &policy));
        assert!(!entry.was_remote_approved);
        assert_eq!(entry.remote_justification, None);
        assert!(intents.is_empty());
    }

    #[rstest]
    fn it_should_accept_a_reading_on_the_boundary(policy: GeofencePolicy) {
        let attempt = PunchAttemptBuilder::new()
            .location(Some(meters_from_office(100.0)))
            .build();
        let (entry, _) = accepted(decide_punch(&PunchState::NeverPunched, attempt, &policy));
        assert!(!entry.was_remote_approved);
    }
}
