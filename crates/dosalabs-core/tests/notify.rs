use dosalabs_core::models::booking::{BookingRecord, EmailStatus};
use dosalabs_core::notify::{
    backoff_delay, evaluate_resend, AttemptOutcome, ResendDecision, MAX_SEND_ATTEMPTS,
};

fn ts(s: &str) -> jiff::Timestamp {
    s.parse().expect("timestamp")
}

fn record(
    status: EmailStatus,
    send_count: u32,
    last_attempt: Option<&str>,
) -> BookingRecord {
    BookingRecord {
        booking_request_id: "req_k3j2_1730000000".to_string(),
        booking_id: "DL-482913".to_string(),
        email: "a@b.com".to_string(),
        guest_name: "Guest".to_string(),
        lab_id: "c1".to_string(),
        lab_name: "Dosa Mastery Lab".to_string(),
        datetime_iso: "2024-11-01T10:00".to_string(),
        amount_cents: 8900,
        currency: "USD".to_string(),
        created_at: ts("2024-11-01T00:00:00Z"),
        updated_at: ts("2024-11-01T00:00:00Z"),
        email_status: status,
        email_send_count: send_count,
        last_email_attempt_at: last_attempt.map(ts),
        email_message_id: None,
        email_error_code: None,
        email_error_message: None,
    }
}

const NOW: &str = "2024-11-01T12:00:00Z";

#[test]
fn sent_status_short_circuits_resend() {
    let r = record(EmailStatus::Sent, 1, Some("2024-11-01T11:59:00Z"));
    assert_eq!(evaluate_resend(&r, ts(NOW)), ResendDecision::AlreadySent);
}

#[test]
fn attempt_cap_rejects_regardless_of_elapsed_time() {
    let r = record(EmailStatus::Failed, MAX_SEND_ATTEMPTS, Some("2024-10-01T00:00:00Z"));
    assert_eq!(evaluate_resend(&r, ts(NOW)), ResendDecision::AttemptsExhausted);
}

#[test]
fn attempt_cap_is_checked_before_cooldown() {
    // Both guards would fire; the cap wins.
    let r = record(EmailStatus::Failed, MAX_SEND_ATTEMPTS, Some("2024-11-01T11:59:30Z"));
    assert_eq!(evaluate_resend(&r, ts(NOW)), ResendDecision::AttemptsExhausted);
}

#[test]
fn recent_attempt_rejects_with_cooldown() {
    let r = record(EmailStatus::Failed, 1, Some("2024-11-01T11:58:00Z"));
    assert_eq!(evaluate_resend(&r, ts(NOW)), ResendDecision::CoolingDown);
}

#[test]
fn cooldown_expires_at_exactly_five_minutes() {
    let r = record(EmailStatus::Failed, 1, Some("2024-11-01T11:55:00Z"));
    assert_eq!(evaluate_resend(&r, ts(NOW)), ResendDecision::Allowed);
}

#[test]
fn queued_record_with_no_attempts_is_allowed() {
    let r = record(EmailStatus::Queued, 0, None);
    assert_eq!(evaluate_resend(&r, ts(NOW)), ResendDecision::Allowed);
}

#[test]
fn rejection_messages_are_distinct_per_guard() {
    let cap = ResendDecision::AttemptsExhausted.rejection_message().expect("cap message");
    let cooldown = ResendDecision::CoolingDown.rejection_message().expect("cooldown message");
    assert_eq!(cap, "Max resend attempts reached");
    assert_eq!(cooldown, "Please wait 5 minutes between retries");
    assert_ne!(cap, cooldown);
    assert_eq!(ResendDecision::AlreadySent.rejection_message(), None);
    assert_eq!(ResendDecision::Allowed.rejection_message(), None);
}

#[test]
fn delivered_attempt_marks_sent_and_counts() {
    let mut r = record(EmailStatus::Queued, 0, None);
    r.record_attempt(
        AttemptOutcome::Delivered { message_id: "email_123".to_string() },
        ts(NOW),
    );

    assert_eq!(r.email_status, EmailStatus::Sent);
    assert_eq!(r.email_send_count, 1);
    assert_eq!(r.last_email_attempt_at, Some(ts(NOW)));
    assert_eq!(r.updated_at, ts(NOW));
    assert_eq!(r.email_message_id.as_deref(), Some("email_123"));
}

#[test]
fn failed_attempt_marks_failed_and_still_counts() {
    let mut r = record(EmailStatus::Queued, 0, None);
    r.record_attempt(
        AttemptOutcome::Failed {
            code: "RESEND_ERROR".to_string(),
            message: "mailbox unavailable".to_string(),
        },
        ts(NOW),
    );

    assert_eq!(r.email_status, EmailStatus::Failed);
    assert_eq!(r.email_send_count, 1);
    assert_eq!(r.email_error_code.as_deref(), Some("RESEND_ERROR"));
    assert_eq!(r.email_error_message.as_deref(), Some("mailbox unavailable"));
}

#[test]
fn send_count_only_ever_increases() {
    let mut r = record(EmailStatus::Queued, 0, None);
    r.record_attempt(
        AttemptOutcome::Failed {
            code: "TIMEOUT".to_string(),
            message: "provider timed out".to_string(),
        },
        ts("2024-11-01T12:00:00Z"),
    );
    r.record_attempt(
        AttemptOutcome::Delivered { message_id: "email_456".to_string() },
        ts("2024-11-01T12:10:00Z"),
    );

    assert_eq!(r.email_send_count, 2);
    assert_eq!(r.email_status, EmailStatus::Sent);
}

#[test]
fn backoff_doubles_per_retry() {
    assert_eq!(backoff_delay(1).as_secs(), 2);
    assert_eq!(backoff_delay(2).as_secs(), 4);
    assert_eq!(backoff_delay(3).as_secs(), 8);
}
