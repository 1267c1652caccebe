//! The storage port used by the pipeline services.

/// A set of actions to perform against an object store.
/// Keys are addressed as `(bucket, key)` pairs; errors carry the context of the failed call.
pub trait ObjectStorage: Clone + Send + Sync + 'static {
    /// Lists every key in the bucket in lexicographic order, restricted to `prefix` if provided
    fn list_keys(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;

    /// Retrieves the full content of the object
    fn get(&self, bucket: &str, key: &str) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;

    /// Writes the content to the key with the given content type, overwriting any existing object
    fn put(
        &self,
        bucket: &str,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Deletes the given keys from the bucket
    fn delete_objects(
        &self,
        bucket: &str,
        keys: Vec<String>,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
