use anyhow::Context;
use s3_client::{CONTENT_TYPE_JSON, ObjectStorage};

use crate::key::generate_raw_document_key;

/// Stores the payload as a json document in the raw data bucket under a freshly generated key.
/// Returns the key that was written.
#[tracing::instrument(skip(storage, payload))]
pub async fn store_raw_payload<S: ObjectStorage>(
    storage: &S,
    bucket: &str,
    payload: &serde_json::Value,
) -> anyhow::Result<String> {
    let key = generate_raw_document_key();
    let body = serde_json::to_vec(payload).context("unable to serialize payload")?;

    storage
        .put(bucket, &key, body, CONTENT_TYPE_JSON)
        .await
        .context("unable to save raw payload")?;

    tracing::info!(key=%key, "raw payload saved");

    Ok(key)
}
