use scriptorium::domain::{TaskRecord, TaskStatus, TaskSummary};

#[test]
fn given_new_record_when_inspected_then_pending_with_zero_progress() {
    let record = TaskRecord::new("Rust ownership".to_string());
    assert_eq!(record.status, TaskStatus::Pending);
    assert_eq!(record.progress, 0);
    assert_eq!(record.current_step, 0);
    assert!(record.step_results.is_empty());
    assert!(record.final_result.is_none());
    assert!(record.error.is_none());
    assert!(!record.degraded);
    assert!(!record.is_terminal());
}

#[test]
fn given_two_records_when_created_then_ids_differ() {
    let a = TaskRecord::new("topic".to_string());
    let b = TaskRecord::new("topic".to_string());
    assert_ne!(a.id, b.id);
}

#[test]
fn given_terminal_statuses_when_checked_then_reported_terminal() {
    assert!(TaskStatus::Completed.is_terminal());
    assert!(TaskStatus::Failed.is_terminal());
    assert!(TaskStatus::Cancelled.is_terminal());
    assert!(!TaskStatus::Pending.is_terminal());
    assert!(!TaskStatus::Running.is_terminal());
}

#[test]
fn given_status_round_trip_when_parsed_then_matches() {
    for status in [
        TaskStatus::Pending,
        TaskStatus::Running,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::Cancelled,
    ] {
        assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
    }
    assert!("BOGUS".parse::<TaskStatus>().is_err());
}

#[test]
fn given_record_when_summarized_then_carries_core_fields() {
    let record = TaskRecord::new("Databases".to_string());
    let summary = TaskSummary::from(&record);
    assert_eq!(summary.id, record.id);
    assert_eq!(summary.topic, "Databases");
    assert_eq!(summary.status, TaskStatus::Pending);
    assert_eq!(summary.progress, 0);
}
