use s3_client::ObjectStorage;

use crate::{error::TransformError, key::build_csv_key, service::transform_object};

/// Default prefix prepended to csv keys written by the batch job
pub static DEFAULT_TARGET_PREFIX: &str = "output/";

/// Where the batch job reads raw documents from and writes csv artifacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTarget<'a> {
    pub source_bucket: &'a str,
    pub target_bucket: &'a str,
    /// Prepended to every derived csv key, e.g. `output/`
    pub target_prefix: &'a str,
}

/// Transforms every object in the source bucket into a csv artifact in the target bucket.
///
/// Objects are processed one at a time in listing order. The first failure aborts the run and is
/// returned to the caller, artifacts written before the failure are left in place.
/// Returns the keys written to the target bucket.
#[tracing::instrument(skip(storage))]
pub async fn transform_and_load<S: ObjectStorage>(
    storage: &S,
    target: BatchTarget<'_>,
) -> Result<Vec<String>, TransformError> {
    let source_keys = storage
        .list_keys(target.source_bucket, None)
        .await
        .inspect_err(|e| tracing::error!(error=?e, "unable to list source bucket"))?;

    if source_keys.is_empty() {
        tracing::info!("no objects found in the source bucket");
        return Ok(Vec::new());
    }

    tracing::info!(object_count = source_keys.len(), "transforming objects");

    let mut written = Vec::with_capacity(source_keys.len());
    for source_key in source_keys {
        let target_key = build_csv_key(&source_key, Some(target.target_prefix));

        transform_object(
            storage,
            target.source_bucket,
            &source_key,
            target.target_bucket,
            &target_key,
        )
        .await
        .inspect_err(|e| {
            tracing::error!(error=?e, source_key=%source_key, "unable to transform object")
        })?;

        tracing::info!(target_key=%target_key, "successfully uploaded transformed data");
        written.push(target_key);
    }

    Ok(written)
}
