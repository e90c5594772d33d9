pub mod dates;
pub mod extract;

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};
use tracing::warn;

use crate::model::JobRecord;

/// Listing cards beyond this are dropped. The site lists newest first, so
/// the cap favors recency over completeness.
pub const MAX_LISTINGS: usize = 10;

const CARD_SELECTOR: &str = "div.job-listing-details";

/// Parse a listings page into records: select the listing cards in document
/// order, cap at [`MAX_LISTINGS`], and extract each one. Zero cards is not an
/// error; the caller decides how to report an empty batch. A card whose
/// extraction panics is logged and skipped without aborting the rest.
pub fn parse_listings(html: &str) -> Result<Vec<JobRecord>> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse(CARD_SELECTOR)
        .map_err(|e| anyhow!("invalid listing selector {CARD_SELECTOR:?}: {e}"))?;

    let cards: Vec<_> = document.select(&card_sel).take(MAX_LISTINGS).collect();
    if cards.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = Vec::with_capacity(cards.len());
    for (i, card) in cards.into_iter().enumerate() {
        match catch_unwind(AssertUnwindSafe(|| extract::extract(card))) {
            Ok(record) => records.push(record),
            Err(_) => warn!("Error extracting listing {} of the page, skipping", i + 1),
        }
    }
    Ok(records)
}
