use s3_client::{CONTENT_TYPE_CSV, ObjectStorage};

use crate::{convert::MalformedInputError, error::TransformError, transform_playlist_data};

/// Fetches one raw document, converts it to csv and writes it to `target_bucket/target_key`
#[tracing::instrument(skip(storage))]
pub async fn transform_object<S: ObjectStorage>(
    storage: &S,
    source_bucket: &str,
    source_key: &str,
    target_bucket: &str,
    target_key: &str,
) -> Result<(), TransformError> {
    let content = storage.get(source_bucket, source_key).await?;
    tracing::trace!("document retrieved");

    let malformed = |source: MalformedInputError| TransformError::MalformedInput {
        bucket: source_bucket.to_string(),
        key: source_key.to_string(),
        source,
    };

    let raw_data = String::from_utf8(content).map_err(|e| malformed(e.into()))?;
    let transformed_data = transform_playlist_data(&raw_data).map_err(malformed)?;
    tracing::trace!("document transformed");

    storage
        .put(
            target_bucket,
            target_key,
            transformed_data.into_bytes(),
            CONTENT_TYPE_CSV,
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use s3_client::mock::MemoryStorage;

    use super::*;

    #[tokio::test]
    async fn test_transform_object_writes_csv() -> anyhow::Result<()> {
        let storage = MemoryStorage::default();
        storage.insert(
            "raw",
            "incoming/road.json",
            r#"{"items":[{"name":"Road Trip","tracks":{"total":42}}]}"#,
        );

        transform_object(&storage, "raw", "incoming/road.json", "target", "road.csv").await?;

        let written = storage.object("target", "road.csv").unwrap();
        assert_eq!(written.content, b"Name,Tracks\nRoad Trip,42\n");
        assert_eq!(written.content_type.as_deref(), Some("text/csv"));
        Ok(())
    }

    #[tokio::test]
    async fn test_transform_object_rejects_malformed_input() {
        let storage = MemoryStorage::default();
        storage.insert("raw", "broken.json", "{ not json");

        let err = transform_object(&storage, "raw", "broken.json", "target", "broken.csv")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TransformError::MalformedInput {
                source: MalformedInputError::InvalidJson(_),
                ..
            }
        ));
        assert_eq!(storage.put_calls(), 0);
    }

    #[tokio::test]
    async fn test_transform_object_rejects_binary_content() {
        let storage = MemoryStorage::default();
        storage.insert("raw", "binary.json", vec![0xff, 0xfe, 0x00]);

        let err = transform_object(&storage, "raw", "binary.json", "target", "binary.csv")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TransformError::MalformedInput {
                source: MalformedInputError::NotUtf8(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_transform_object_missing_source() {
        let storage = MemoryStorage::default();

        let err = transform_object(&storage, "raw", "missing.json", "target", "missing.csv")
            .await
            .unwrap_err();

        assert!(matches!(err, TransformError::StorageAccess(_)));
    }
}
