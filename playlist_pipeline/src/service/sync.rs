use s3_client::ObjectStorage;

use crate::{error::TransformError, key::build_csv_key, service::transform_object};

/// Default prefix of prior output removed from the source bucket after a transform
pub static DEFAULT_CLEANUP_PREFIX: &str = "output/";

/// The result of a successful [transform_and_sync]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Key of the csv artifact in the target bucket
    pub target_key: String,
    /// Keys removed from the cleanup prefix of the source bucket
    pub removed_keys: Vec<String>,
}

/// Transforms a single notified object and then clears prior output from the source bucket.
///
/// The csv artifact is written to the target bucket under the unprefixed derived key. Only once
/// that write succeeds are the objects under `cleanup_prefix` in the source bucket deleted, in a
/// single bulk delete which is skipped when there is nothing to remove.
#[tracing::instrument(skip(storage))]
pub async fn transform_and_sync<S: ObjectStorage>(
    storage: &S,
    source_bucket: &str,
    source_key: &str,
    target_bucket: &str,
    cleanup_prefix: &str,
) -> Result<SyncOutcome, TransformError> {
    let target_key = build_csv_key(source_key, None);

    transform_object(storage, source_bucket, source_key, target_bucket, &target_key)
        .await
        .inspect_err(|e| tracing::error!(error=?e, "unable to transform object"))?;

    tracing::info!(
        target_bucket=%target_bucket,
        target_key=%target_key,
        "transformed file saved"
    );

    let removed_keys = remove_prior_output(storage, source_bucket, cleanup_prefix)
        .await
        .inspect_err(|e| tracing::error!(error=?e, "unable to remove prior output"))?;

    Ok(SyncOutcome {
        target_key,
        removed_keys,
    })
}

#[tracing::instrument(skip(storage))]
async fn remove_prior_output<S: ObjectStorage>(
    storage: &S,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, TransformError> {
    let keys = storage.list_keys(bucket, Some(prefix)).await?;

    if keys.is_empty() {
        tracing::trace!("no prior output to remove");
        return Ok(keys);
    }

    storage.delete_objects(bucket, keys.clone()).await?;
    tracing::info!(removed = keys.len(), "removed prior output from the source bucket");

    Ok(keys)
}
