use anyhow::Context;

/// The configuration parameters for the ingest function, pulled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket raw playlist documents are written to
    pub raw_data_bucket: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw_data_bucket =
            std::env::var("RAW_DATA_BUCKET").context("RAW_DATA_BUCKET must be provided")?;

        Ok(Config { raw_data_bucket })
    }
}
