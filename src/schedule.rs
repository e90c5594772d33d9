use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::fetch::Fetcher;
use crate::pipeline;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Interval {
    /// Once per day at 09:00.
    Daily,
    /// Once per hour on the hour.
    Hourly,
}

impl Interval {
    fn cron(self) -> &'static str {
        match self {
            Interval::Daily => "0 0 9 * * *",
            Interval::Hourly => "0 0 * * * *",
        }
    }
}

/// Run the pipeline on a schedule, forever. A failed run is logged and the
/// loop keeps going; nothing short of process exit stops it.
pub async fn run_forever(interval: Interval) -> Result<()> {
    let scheduler = JobScheduler::new()
        .await
        .context("Failed to create scheduler")?;

    let job = Job::new_async(interval.cron(), move |_uuid, _lock| {
        Box::pin(async move {
            let fetcher = match Fetcher::new() {
                Ok(f) => f,
                Err(e) => {
                    error!("Scheduled run failed to build HTTP client: {e:#}");
                    return;
                }
            };
            let outcome = pipeline::run(&fetcher).await;
            info!("Scheduled run finished: {:?}", outcome);
        })
    })
    .context("Failed to build scheduled job")?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!("Scheduler started with interval: {:?}", interval);

    loop {
        tokio::time::sleep(Duration::from_secs(60)).await;
    }
}
