use anyhow::Context;

/// Puts the content at the given key, replacing any existing object
#[tracing::instrument(skip(client, content), fields(content_len = content.len()))]
pub(crate) async fn put(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    content: Vec<u8>,
    content_type: &str,
) -> anyhow::Result<()> {
    let body = aws_sdk_s3::primitives::ByteStream::from(content);
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .content_type(content_type)
        .send()
        .await
        .context(format!("could not put item {key} into bucket {bucket}"))?;
    Ok(())
}
