//! Meeting record loading for the CLI

use std::path::Path;

use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::domain::meeting::MeetingRecord;

/// Errors while reading a meeting file
#[derive(Debug, Error)]
pub enum MeetingFileError {
    #[error("Failed to read meeting file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid meeting JSON in '{path}': {message}")]
    Parse { path: String, message: String },
}

/// Read a meeting record from a JSON file, or stdin when `path` is `-`
pub async fn load_meeting(path: &Path) -> Result<MeetingRecord, MeetingFileError> {
    let display = path.display().to_string();

    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|e| MeetingFileError::Read {
                path: display.clone(),
                message: e.to_string(),
            })?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MeetingFileError::Read {
                path: display.clone(),
                message: e.to_string(),
            })?
    };

    parse_meeting(&content).map_err(|message| MeetingFileError::Parse {
        path: display,
        message,
    })
}

fn parse_meeting(content: &str) -> Result<MeetingRecord, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}
