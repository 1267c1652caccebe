use anyhow::Context;
use aws_sdk_s3 as s3;
use s3::types::{Delete, ObjectIdentifier};

/// Maximum number of keys accepted by a single DeleteObjects request
const DELETE_BATCH_SIZE: usize = 1000;

/// Deletes a given list of items from the bucket
#[tracing::instrument(skip(client, keys), fields(key_count = keys.len()))]
pub(crate) async fn delete_objects(
    client: &s3::Client,
    bucket: &str,
    keys: Vec<String>,
) -> anyhow::Result<()> {
    for chunk in keys.chunks(DELETE_BATCH_SIZE) {
        tracing::trace!("deleting chunk");
        delete_chunk(client, bucket, chunk).await?;
    }
    Ok(())
}

async fn delete_chunk(client: &s3::Client, bucket: &str, keys: &[String]) -> anyhow::Result<()> {
    let mut delete_objects: Vec<ObjectIdentifier> = Vec::with_capacity(keys.len());

    for key in keys {
        let obj_id = ObjectIdentifier::builder()
            .key(key)
            .build()
            .context("building ObjectIdentifier")?;
        delete_objects.push(obj_id);
    }

    let delete = Delete::builder()
        .set_objects(Some(delete_objects))
        .build()
        .context("building Delete")?;

    let resp = client
        .delete_objects()
        .bucket(bucket)
        .delete(delete)
        .send()
        .await
        .context(format!("could not delete objects from bucket {bucket}"))?;

    // DeleteObjects reports per key failures in the response body instead of the status code
    if let Some(err) = resp.errors().first() {
        anyhow::bail!(
            "could not delete {} of {} objects from bucket {bucket}, first failure {:?}: {:?}",
            resp.errors().len(),
            keys.len(),
            err.key(),
            err.message()
        );
    }

    Ok(())
}
