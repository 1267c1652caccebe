#![recursion_limit = "256"]

mod config;
mod context;
mod handler;

use anyhow::Context;
use aws_config::{Region, meta::region::RegionProviderChain};
use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use config::Config;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use pipeline_entrypoint::PipelineEntrypoint;

#[tokio::main]
async fn main() -> Result<(), Error> {
    PipelineEntrypoint::default().init();
    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::from_env().region(region_provider).load().await;
    let storage = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));

    tracing::trace!("initialized s3 client");

    let ctx = context::Context { storage, config };

    let func = service_fn(move |event: LambdaEvent<EventBridgeEvent>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
