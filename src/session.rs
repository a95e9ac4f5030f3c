//! Session loading: reads evaluation-engine output from disk or stdin

use crate::error::SessionError;
use crate::SessionData;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path argument that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Parse session JSON. A missing `questions` array is an error; null or
/// malformed optional fields fall back to their defaults.
pub fn parse_session(content: &str) -> Result<SessionData, SessionError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a session from `path`, or from stdin when `path` is `-`
pub fn load_session(path: &Path) -> Result<SessionData, SessionError> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(SessionError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_session(&content)
}
