//! Integration tests for session persistence

use chrono::{Local, TimeZone};
use debate_coach::core::{load_record, save_session, session_path};
use debate_coach::types::{Message, Session, SessionSettings, Stance};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn finished_session(topic: &str, stance: Stance) -> Session {
    let at = Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    let settings = SessionSettings::from_answers("환경", "고등학생", "중");
    let mut session = Session::with_stance(topic, settings, stance).created_at_time(at);
    session.add_entry(Message::user("찬성 입론"));
    session.add_entry(Message::assistant("반대 입론"));
    session.add_note("찬성 측(사용자) 입론 완료");
    session.add_note("반대 측(상대) 입론 완료");
    session.feedback = Some("좋았습니다.\n개선할 점: 예시를 더.".into());
    session.improvements.push("예시를 더.".into());
    session
}

/// Test a saved record loads back equal to the session
#[test]
fn test_round_trip_matches_session() {
    let dir = TempDir::new().unwrap();
    let session = finished_session("일회용 컵 사용을 금지해야 한다", Stance::Pro);

    let path = save_session(&session, dir.path()).unwrap();
    let record = load_record(&path).unwrap();

    assert_eq!(record.topic, session.topic());
    assert_eq!(record.user_stance, session.user_stance());
    assert_eq!(record.bot_stance, session.bot_stance());
    assert_eq!(record.chat_log, session.transcript().messages().to_vec());
    assert_eq!(record.feedback, session.feedback);
    assert_eq!(record.improvements, session.improvements);
    assert_eq!(record.summary_notes, session.summary_notes);
    assert_eq!(record.time, "25-06-01 09:30:00");
}

/// Test the file lands under the category with a sanitized name
#[test]
fn test_path_under_category_with_sanitized_topic() {
    let dir = TempDir::new().unwrap();
    let session = finished_session("AI/로봇 세금 도입", Stance::Con);

    let path = save_session(&session, dir.path()).unwrap();

    assert!(path.exists());
    assert_eq!(path.parent().unwrap(), dir.path().join("환경"));
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "AI_로봇_세금_도입_20250601_093000.json"
    );
    assert_eq!(path, session_path(dir.path(), &session));
}

/// Test the file is pretty JSON with Korean kept as-is
#[test]
fn test_file_is_readable_utf8_json() {
    let dir = TempDir::new().unwrap();
    let session = finished_session("교복 폐지", Stance::Pro);

    let path = save_session(&session, dir.path()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();

    // Pretty printed, Korean kept as-is
    assert!(text.contains('\n'));
    assert!(text.contains("\"user_stance\": \"찬성\""));
    assert!(text.contains("\"bot_stance\": \"반대\""));
    assert!(text.contains("\"role\": \"assistant\""));
}

/// Test two saves in the same second share one file
#[test]
fn test_same_second_overwrites() {
    let dir = TempDir::new().unwrap();
    let first = finished_session("같은 주제", Stance::Pro);
    let mut second = finished_session("같은 주제", Stance::Pro);
    second.feedback = Some("두 번째".into());

    let p1 = save_session(&first, dir.path()).unwrap();
    let p2 = save_session(&second, dir.path()).unwrap();

    assert_eq!(p1, p2);
    assert_eq!(load_record(&p2).unwrap().feedback.as_deref(), Some("두 번째"));
}

/// Test loading a missing file reports an IO error
#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_record(dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.code(), "E301_IO");
}
