use std::path::Path;

use chrono::Local;
use tracing::{error, info, warn};

use crate::fetch::Fetcher;
use crate::{model, parser, sink};

/// What a single run accomplished. No variant is a process-level failure;
/// in scheduled mode every outcome just gets logged and the loop continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were extracted and handed to the CSV sink.
    Written(usize),
    /// The page fetched and parsed but contained no listing cards.
    Empty,
    FetchFailed,
    ParseFailed,
}

/// One full run: fetch, parse, dedupe, write.
pub async fn run(fetcher: &Fetcher) -> RunOutcome {
    info!("Starting scraping task...");

    let html = match fetcher.fetch_listings().await {
        Ok(html) => html,
        Err(e) => {
            error!("Request failed: {e:#}");
            return RunOutcome::FetchFailed;
        }
    };

    let records = match parser::parse_listings(&html) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to parse listings page: {e:#}");
            return RunOutcome::ParseFailed;
        }
    };

    if records.is_empty() {
        warn!("No job listings found. Check the website structure.");
        return RunOutcome::Empty;
    }

    let records = model::dedupe(records);
    let count = records.len();
    let filename = sink::destination_name(Local::now());

    // A write failure is logged but does not invalidate the extracted batch.
    match sink::write_csv(&records, Path::new(&filename)) {
        Ok(()) => info!("Saved {} job listings to {}", count, filename),
        Err(e) => error!("Failed to save data: {e:#}"),
    }

    RunOutcome::Written(count)
}
