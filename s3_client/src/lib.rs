mod delete;
mod get;
mod list;
mod put;
mod storage;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use storage::ObjectStorage;

/// Content type used for raw json documents
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Content type used for transformed csv artifacts
pub const CONTENT_TYPE_CSV: &str = "text/csv";

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }
}

impl ObjectStorage for S3 {
    #[tracing::instrument(skip(self))]
    async fn list_keys(&self, bucket: &str, prefix: Option<&str>) -> anyhow::Result<Vec<String>> {
        list::list_keys(&self.inner, bucket, prefix).await
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        get::get(&self.inner, bucket, key).await
    }

    #[tracing::instrument(skip(self, content))]
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<()> {
        put::put(&self.inner, bucket, key, content, content_type).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> anyhow::Result<()> {
        delete::delete_objects(&self.inner, bucket, keys).await
    }
}
