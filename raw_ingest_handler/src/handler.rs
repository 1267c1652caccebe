use lambda_runtime::{Error, LambdaEvent, tracing};
use playlist_pipeline::{FunctionResponse, service::store_raw_payload};
use s3_client::ObjectStorage;
use serde::{Deserialize, Deserializer};

use crate::context::Context;

/// The event delivered to the ingest function.
/// Only `detail` is read; the rest of the eventbridge envelope is ignored.
#[derive(Debug, Deserialize)]
pub struct IngestEvent {
    /// [None] only when the field is absent, a json `null` detail is `Some(Value::Null)`
    #[serde(default, deserialize_with = "present_value")]
    pub detail: Option<serde_json::Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Persists the event detail to the raw data bucket
#[tracing::instrument(skip(ctx, event), fields(request_id=%event.context.request_id))]
pub async fn handler<S: ObjectStorage>(
    ctx: Context<S>,
    event: LambdaEvent<IngestEvent>,
) -> Result<FunctionResponse, Error> {
    let response = handle_event(&ctx, event.payload).await;
    tracing::info!(
        success = response.is_success(),
        status_code = response.status_code,
        "ingest complete"
    );
    Ok(response)
}

/// Storage failures are reported through the response rather than as an invocation error
pub(crate) async fn handle_event<S: ObjectStorage>(
    ctx: &Context<S>,
    event: IngestEvent,
) -> FunctionResponse {
    tracing::debug!(event=?event, "received event");

    let Some(detail) = event.detail else {
        tracing::error!("event is missing the detail field");
        return FunctionResponse::error("Event is missing the detail field.");
    };

    match store_raw_payload(&ctx.storage, &ctx.config.raw_data_bucket, &detail).await {
        Ok(key) => {
            tracing::info!(key=%key, "data successfully saved");
            FunctionResponse::ok("Data successfully saved to S3!")
        }
        Err(e) => {
            tracing::error!(error=?e, "error saving data");
            FunctionResponse::error("Error saving data to S3.")
        }
    }
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
                raw_data_bucket: "s3-lambda-raw-data".to_string(),
            },
        }
    }

    fn scheduled_event(detail: serde_json::Value) -> IngestEvent {
        serde_json::from_value(serde_json::json!({
            "version": "0",
            "id": "53dc4d37-cffa-4f76-80c9-8b7d4a4d2eaa",
            "detail-type": "Spotify Playlists",
            "source": "custom.spotify",
            "account": "123456789012",
            "time": "2024-03-01T09:05:07Z",
            "region": "us-east-1",
            "resources": [],
            "detail": detail
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_saves_detail_to_raw_bucket() {
        let storage = MemoryStorage::default();
        let ctx = context(storage.clone());
        let detail = serde_json::json!({"items": [{"name": "Road Trip", "tracks": {"total": 42}}]});

        let response = handle_event(&ctx, scheduled_event(detail.clone())).await;

        assert_eq!(response, FunctionResponse::ok("Data successfully saved to S3!"));
        let keys = storage.keys("s3-lambda-raw-data");
        assert_eq!(keys.len(), 1);
        assert!(keys[0].starts_with("spotify_data_") && keys[0].ends_with(".json"));
        let stored = storage.object("s3-lambda-raw-data", &keys[0]).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&stored.content).unwrap(),
            detail
        );
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() {
        let storage = MemoryStorage::default();
        storage.fail_puts();
        let ctx = context(storage);

        let response = handle_event(&ctx, scheduled_event(serde_json::json!({"items": []}))).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "\"Error saving data to S3.\"");
    }

    #[tokio::test]
    async fn test_null_detail_is_saved() {
        let storage = MemoryStorage::default();
        let ctx = context(storage.clone());

        let event = scheduled_event(serde_json::Value::Null);
        assert_eq!(event.detail, Some(serde_json::Value::Null));

        let response = handle_event(&ctx, event).await;

        assert_eq!(response, FunctionResponse::ok("Data successfully saved to S3!"));
        let keys = storage.keys("s3-lambda-raw-data");
        assert_eq!(keys.len(), 1);
        assert_eq!(
            storage.object("s3-lambda-raw-data", &keys[0]).unwrap().content,
            b"null"
        );
    }

    #[tokio::test]
    async fn test_missing_detail_returns_500() {
        let storage = MemoryStorage::default();
        let ctx = context(storage.clone());
        let event: IngestEvent =
            serde_json::from_value(serde_json::json!({"source": "custom.spotify"})).unwrap();
        assert!(event.detail.is_none());

        let response = handle_event(&ctx, event).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(storage.put_calls(), 0);
    }
}
