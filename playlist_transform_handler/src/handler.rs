use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, tracing};
use playlist_pipeline::{
    FunctionResponse, TransformError, key::decode_notification_key, service::transform_and_sync,
};
use s3_client::ObjectStorage;

use crate::context::Context;

/// The object a notification refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceObject {
    pub bucket: String,
    pub key: String,
}

impl SourceObject {
    /// Reads the bucket and decoded key of the first record of the notification
    pub fn from_event(event: &S3Event) -> Result<Self, TransformError> {
        if event.records.len() > 1 {
            tracing::warn!(
                record_count = event.records.len(),
                "only the first record of the notification is processed"
            );
        }

        let record = event.records.first().ok_or_else(|| {
            TransformError::InvalidNotification("notification contains no records".to_string())
        })?;

        let bucket = record.s3.bucket.name.clone().ok_or_else(|| {
            TransformError::InvalidNotification("record is missing the bucket name".to_string())
        })?;

        let raw_key = record.s3.object.key.as_deref().ok_or_else(|| {
            TransformError::InvalidNotification("record is missing the object key".to_string())
        })?;

        let key = decode_notification_key(raw_key).map_err(|e| {
            TransformError::InvalidNotification(format!("object key {raw_key} is not utf-8: {e}"))
        })?;

        Ok(Self { bucket, key })
    }
}

/// Processes the s3 event
#[tracing::instrument(skip(ctx, event), fields(request_id=%event.context.request_id))]
pub async fn handler<S: ObjectStorage>(
    ctx: Context<S>,
    event: LambdaEvent<S3Event>,
) -> Result<FunctionResponse, Error> {
    let response = handle_event(&ctx, &event.payload).await;
    tracing::info!(
        success = response.is_success(),
        status_code = response.status_code,
        "transform complete"
    );
    Ok(response)
}

/// Failures are reported as a 500 response instead of an invocation error
pub(crate) async fn handle_event<S: ObjectStorage>(
    ctx: &Context<S>,
    event: &S3Event,
) -> FunctionResponse {
    let source = match SourceObject::from_event(event) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error=?e, "unable to read notification");
            return FunctionResponse::error(&format!("Error reading notification: {e}"));
        }
    };

    let target_bucket = ctx.config.target_bucket.as_str();

    match transform_and_sync(
        &ctx.storage,
        &source.bucket,
        &source.key,
        target_bucket,
        &ctx.config.cleanup_prefix,
    )
    .await
    {
        Ok(outcome) => FunctionResponse::ok(&format!(
            "File transformed and saved successfully to {target_bucket}/{}",
            outcome.target_key
        )),
        Err(e) => {
            tracing::error!(error=?e, key=%source.key, bucket=%source.bucket, "error processing file");
            FunctionResponse::error(&format!("Error processing file {}: {e}", source.key))
        }
    }
}
