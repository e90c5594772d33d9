use std::sync::LazyLock;

use chrono::Local;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::model::{JobRecord, SENTINEL};
use crate::parser::dates;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.job-listing-title").unwrap());
static COMPANY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h4.job-listing-company").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.job-listing-text").unwrap());
static LI_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

// The site tags listing metadata with icon classes rather than semantic
// markup, so location and expiry are found by substring match against each
// list item's raw markup. First match per marker wins.
const LOCATION_MARKER: &str = "icon-material-outline-location-on";
const EXPIRY_MARKER: &str = "icon-material-outline-access-time";

/// Collapse runs of whitespace (newlines included) to a single space and trim.
pub fn clean_text(text: &str) -> String {
    WS_RE.replace_all(text, " ").trim().to_string()
}

/// Build one record from a listing card. Never fails: any sub-element that
/// cannot be located leaves its field at the sentinel value.
pub fn extract(card: ElementRef) -> JobRecord {
    let title = select_text(card, &TITLE_SEL);
    let company = select_text(card, &COMPANY_SEL);
    let description = select_text(card, &DESCRIPTION_SEL);

    let mut location = SENTINEL.to_string();
    let mut expiry_date = SENTINEL.to_string();
    let mut location_found = false;
    let mut expiry_found = false;

    for li in card.select(&LI_SEL) {
        let markup = li.html();
        if !location_found && markup.contains(LOCATION_MARKER) {
            location = clean_text(&li.text().collect::<String>());
            location_found = true;
        } else if !expiry_found && markup.contains(EXPIRY_MARKER) {
            let raw = clean_text(&li.text().collect::<String>())
                .replace("Expires", "")
                .trim()
                .to_string();
            expiry_date = dates::normalize(&raw);
            expiry_found = true;
        }
        if location_found && expiry_found {
            break;
        }
    }

    JobRecord {
        title,
        company,
        location,
        expiry_date,
        description,
        scraped_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

fn select_text(card: ElementRef, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .unwrap_or_else(|| SENTINEL.to_string())
}
