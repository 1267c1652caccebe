use anyhow::Context;
use playlist_pipeline::service::{BatchTarget, DEFAULT_TARGET_PREFIX};

/// The configuration parameters for the batch transform job, pulled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket holding raw playlist documents
    pub source_bucket: String,

    /// The bucket csv artifacts are written to
    pub target_bucket: String,

    /// Prefix prepended to every csv key in the target bucket
    pub target_prefix: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let source_bucket =
            std::env::var("SOURCE_BUCKET").context("SOURCE_BUCKET must be provided")?;

        let target_bucket =
            std::env::var("TARGET_BUCKET").context("TARGET_BUCKET must be provided")?;

        let target_prefix =
            std::env::var("TARGET_PREFIX").unwrap_or_else(|_| DEFAULT_TARGET_PREFIX.to_string());

        Ok(Config {
            source_bucket,
            target_bucket,
            target_prefix,
        })
    }

    pub fn batch_target(&self) -> BatchTarget<'_> {
        BatchTarget {
            source_bucket: &self.source_bucket,
            target_bucket: &self.target_bucket,
            target_prefix: &self.target_prefix,
        }
    }
}
