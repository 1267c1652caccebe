#![deny(missing_docs)]
//! This crate provides the initialization process shared by every pipeline binary.
//! It keeps tracing output consistent between the ingest function, the batch job and the transform function.

use pipeline_env::Environment;
use tracing_subscriber::EnvFilter;

/// Defines how a pipeline binary is initialized
#[derive(Debug)]
pub struct PipelineEntrypoint {
    env: Environment,
}

impl Default for PipelineEntrypoint {
    fn default() -> Self {
        PipelineEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [PipelineEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

/// The shape of the log lines a binary emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// multi line, coloured output for a developer terminal
    Pretty,
    /// one flattened json object per line for cloudwatch
    Json,
}

impl From<Environment> for LogFormat {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => LogFormat::Pretty,
            Environment::Production | Environment::Develop => LogFormat::Json,
        }
    }
}

impl PipelineEntrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_file(true)
            .with_line_number(true);

        match LogFormat::from(self.env) {
            LogFormat::Pretty => subscriber.with_ansi(true).pretty().init(),
            LogFormat::Json => subscriber
                .with_ansi(false)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init(),
        }

        tracing::info!(environment=%self.env, "initialized pipeline binary");

        InitializedEntrypoint(())
    }
}
