//! Session persistence
//!
//! Layout: <base>/<category>/<topic>_<YYYYmmdd_HHMMSS>.json
//! Same topic within the same second overwrites the earlier file.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

use crate::error::Result;
use crate::types::{Session, SessionRecord};

/// Timestamp part of the filename
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

lazy_static! {
    // Whitespace, path separators and characters Windows rejects in filenames
    static ref RE_UNSAFE: Regex = Regex::new(r#"[\s/\\:*?"<>|]"#).unwrap();
}

/// Make a string safe as a single path component. Each unsafe char becomes `_`.
pub fn sanitize_component(raw: &str) -> String {
    let cleaned = RE_UNSAFE.replace_all(raw.trim(), "_");
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "untitled".to_string()
    } else {
        cleaned.into_owned()
    }
}

/// Where `session` will be written under `base_dir`
pub fn session_path(base_dir: impl AsRef<Path>, session: &Session) -> PathBuf {
    let filename = format!(
        "{}_{}.json",
        sanitize_component(session.topic()),
        session.created_at().format(FILE_TIME_FORMAT)
    );
    base_dir
        .as_ref()
        .join(sanitize_component(&session.settings().category))
        .join(filename)
}

/// Write the session record as pretty JSON, creating directories as needed
pub fn save_session(session: &Session, base_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = session_path(base_dir, session);
    let json = serde_json::to_string_pretty(&SessionRecord::from(session))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, json)?;

    info!(path = %path.display(), "session saved");
    Ok(path)
}

/// Read a saved record back
pub fn load_record(path: impl AsRef<Path>) -> Result<SessionRecord> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SessionSettings, Stance};
    use chrono::{Local, TimeZone};

    #[test]
    fn test_sanitize_spaces_and_separators() {
        assert_eq!(sanitize_component("공공장소 흡연 금지"), "공공장소_흡연_금지");
        assert_eq!(sanitize_component("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_component("why? \"now\""), "why___now_");
    }

    #[test]
    fn test_sanitize_empty_and_dots() {
        assert_eq!(sanitize_component("   "), "untitled");
        assert_eq!(sanitize_component(".."), "untitled");
    }

    #[test]
    fn test_session_path_layout() {
        let at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let settings = SessionSettings::from_answers("사회/정치", "", "");
        let session = Session::with_stance("교복 폐지", settings, Stance::Pro).created_at_time(at);

        let path = session_path("out", &session);
        assert_eq!(
            path,
            Path::new("out").join("사회_정치").join("교복_폐지_20250102_030405.json")
        );
    }
}
