use thiserror::Error;

use crate::model::PlaylistPage;

/// First line of every csv artifact
pub static CSV_HEADER: &str = "Name,Tracks";

/// The input could not be read as a playlist document
#[derive(Debug, Error)]
pub enum MalformedInputError {
    /// the raw bytes are not text
    #[error("content is not valid utf-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
    /// the text is not json
    #[error("content is not valid json: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// the json document is not an object
    #[error("expected a json object but found {0}")]
    NotAnObject(&'static str),
    /// the object does not have the expected field types
    #[error("unexpected playlist document shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

/// Converts a raw playlist document into csv text.
///
/// Produces the `Name,Tracks` header followed by one row per entry of `items`, in document order.
/// Entries missing a name are written as `Unknown` and entries missing `tracks.total` are written with `0`.
pub fn transform_playlist_data(raw_data: &str) -> Result<String, MalformedInputError> {
    let value: serde_json::Value =
        serde_json::from_str(raw_data).map_err(MalformedInputError::InvalidJson)?;

    if !value.is_object() {
        return Err(MalformedInputError::NotAnObject(json_type_name(&value)));
    }

    let page: PlaylistPage =
        serde_json::from_value(value).map_err(MalformedInputError::UnexpectedShape)?;

    let mut csv_data = format!("{CSV_HEADER}\n");
    for playlist in page.into_playlists() {
        csv_data.push_str(&playlist.to_csv_row());
        csv_data.push('\n');
    }

    Ok(csv_data)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
