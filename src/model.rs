use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Placeholder for any field whose source element could not be located.
pub const SENTINEL: &str = "N/A";

/// One scraped job listing. Field names map to the CSV column headers;
/// column order is fixed by declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Expiry Date")]
    pub expiry_date: String,
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Scraped At")]
    pub scraped_at: String,
}

/// Drop rows that are identical to an earlier row across every field,
/// `scraped_at` included. First occurrence wins; order is preserved.
pub fn dedupe(records: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen: HashSet<JobRecord> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}
