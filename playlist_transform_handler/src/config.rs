use anyhow::Context;
use playlist_pipeline::service::DEFAULT_CLEANUP_PREFIX;

/// The configuration parameters for the transform function, pulled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket transformed csv artifacts are written to
    pub target_bucket: String,

    /// Prefix in the source bucket whose objects are removed after a successful transform
    pub cleanup_prefix: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let target_bucket =
            std::env::var("TARGET_BUCKET").context("TARGET_BUCKET must be provided")?;

        let cleanup_prefix = std::env::var("CLEANUP_PREFIX")
            .unwrap_or_else(|_| DEFAULT_CLEANUP_PREFIX.to_string());

        Ok(Config {
            target_bucket,
            cleanup_prefix,
        })
    }
}
