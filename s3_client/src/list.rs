use anyhow::Context;
use aws_sdk_s3 as s3;

/// Lists every key in the bucket, optionally restricted to a prefix.
/// Follows continuation tokens so buckets with more than 1000 objects are listed in full.
#[tracing::instrument(skip(client))]
pub(crate) async fn list_keys(
    client: &s3::Client,
    bucket: &str,
    prefix: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .set_prefix(prefix.map(str::to_owned))
        .into_paginator()
        .send();

    let mut keys = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page.context(format!("could not list objects in bucket {bucket}"))?;
        keys.extend(
            page.contents()
                .iter()
                .filter_map(|obj| obj.key())
                .map(String::from),
        );
    }
    tracing::trace!(key_count = keys.len(), "got objects");

    Ok(keys)
}
