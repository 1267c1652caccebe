//! Object key helpers for raw documents and csv artifacts.

use std::string::FromUtf8Error;

use chrono::NaiveDateTime;
use uuid::Uuid;

/// Prefix of every key generated by the ingest function
pub static RAW_DOCUMENT_KEY_PREFIX: &str = "spotify_data";

/// Builds the key for a raw document stored at `timestamp`.
/// The random token keeps keys unique across concurrent invocations within the same second.
///
/// e.g. `spotify_data_2024-03-01_09-15-00_3f2b...e1.json`
pub fn build_raw_document_key(timestamp: NaiveDateTime, token: Uuid) -> String {
    format!(
        "{}_{}_{}.json",
        RAW_DOCUMENT_KEY_PREFIX,
        timestamp.format("%Y-%m-%d_%H-%M-%S"),
        token.simple()
    )
}

/// Builds a fresh raw document key from the current local time and a random v4 token
pub fn generate_raw_document_key() -> String {
    build_raw_document_key(chrono::Local::now().naive_local(), Uuid::new_v4())
}

/// Derives the csv artifact key for a source key.
///
/// Takes the last path segment of the source key and swaps a trailing `.json` for `.csv`.
/// Names without the `.json` suffix are kept unchanged. The prefix is prepended verbatim.
pub fn build_csv_key(source_key: &str, prefix: Option<&str>) -> String {
    let file_name = source_key.rsplit('/').next().unwrap_or(source_key);
    let file_name = match file_name.strip_suffix(".json") {
        Some(stem) => format!("{stem}.csv"),
        None => file_name.to_string(),
    };

    match prefix {
        Some(prefix) => format!("{prefix}{file_name}"),
        None => file_name,
    }
}

/// Decodes an object key from an s3 event notification.
/// Notification keys are form encoded, so `+` stands for a space.
pub fn decode_notification_key(raw_key: &str) -> Result<String, FromUtf8Error> {
    let spaced = raw_key.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}
