use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use lambda_runtime::{Error, LambdaEvent, tracing};
use playlist_pipeline::{TransformError, service::transform_and_load};
use s3_client::ObjectStorage;

use crate::context::Context;

/// Runs one pass of the batch transform. The scheduled event carries no input.
/// Errors are returned to the runtime so the scheduler marks the run as failed and applies its retry policy.
#[tracing::instrument(skip(ctx, _event))]
pub async fn handler<S: ObjectStorage>(
    ctx: Context<S>,
    _event: LambdaEvent<EventBridgeEvent>,
) -> Result<(), Error> {
    run_job(&ctx).await?;
    Ok(())
}

pub(crate) async fn run_job<S: ObjectStorage>(
    ctx: &Context<S>,
) -> Result<Vec<String>, TransformError> {
    let target = ctx.config.batch_target();
    tracing::info!(
        source_bucket=%target.source_bucket,
        target_bucket=%target.target_bucket,
        "starting transform"
    );

    let written = transform_and_load(&ctx.storage, target)
        .await
        .inspect_err(|e| tracing::error!(error=?e, "transform run failed"))?;

    tracing::info!(written = written.len(), "transform complete");

    Ok(written)
}

#[cfg(test)]
mod tests {
    use s3_client::mock::MemoryStorage;

    use super::*;
    use crate::config::Config;

    fn context(storage: MemoryStorage) -> Context<MemoryStorage> {
        Context {
            storage,
            config: Config {
                source_bucket: "s3-lambda-raw-data".to_string(),
                target_bucket: "transform-data-um".to_string(),
                target_prefix: "output/".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_run_job_on_empty_bucket() {
        let storage = MemoryStorage::default();
        let ctx = context(storage.clone());

        let written = run_job(&ctx).await.unwrap();

        assert!(written.is_empty());
        assert_eq!(storage.get_calls(), 0);
        assert_eq!(storage.put_calls(), 0);
    }

    #[tokio::test]
    async fn test_run_job_writes_prefixed_keys() {
        let storage = MemoryStorage::default();
        storage.insert(
            "s3-lambda-raw-data",
            "spotify_data_2024-03-01_09-05-07_67e5504410b1426f9247bb680e5fe0c8.json",
            r#"{"items":[{"name":"Road Trip","tracks":{"total":42}},{"name":"Gym"}]}"#,
        );
        let ctx = context(storage.clone());

        let written = run_job(&ctx).await.unwrap();

        assert_eq!(
            written,
            vec!["output/spotify_data_2024-03-01_09-05-07_67e5504410b1426f9247bb680e5fe0c8.csv"]
        );
        let artifact = storage.object("transform-data-um", &written[0]).unwrap();
        assert_eq!(artifact.content, b"Name,Tracks\nRoad Trip,42\nGym,0\n");
        assert_eq!(artifact.content_type.as_deref(), Some("text/csv"));
    }

    #[tokio::test]
    async fn test_run_job_fails_on_malformed_object() {
        let storage = MemoryStorage::default();
        storage.insert("s3-lambda-raw-data", "bad.json", "<xml/>");
        let ctx = context(storage.clone());

        let err = run_job(&ctx).await.unwrap_err();

        assert!(matches!(err, TransformError::MalformedInput { .. }));
        assert_eq!(storage.put_calls(), 0);
    }
}
