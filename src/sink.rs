use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::model::JobRecord;

/// Per-run output name, e.g. `scraped_data_20250305_090000.csv`. Consecutive
/// runs get distinct names so they never overwrite each other.
pub fn destination_name(now: DateTime<Local>) -> String {
    format!("scraped_data_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write records as CSV. The header row and column order come from the
/// field order of [`JobRecord`].
pub fn write_csv(records: &[JobRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_records() -> Vec<JobRecord> {
        vec![
            JobRecord {
                title: "Accountant".into(),
                company: "Acme Ltd".into(),
                location: "Harare".into(),
                expiry_date: "2025-03-05".into(),
                description: "Keep the books, with commas too.".into(),
                scraped_at: "2025-03-01 09:00:00".into(),
            },
            JobRecord {
                title: "Driver".into(),
                company: "N/A".into(),
                location: "N/A".into(),
                expiry_date: "soon".into(),
                description: "N/A".into(),
                scraped_at: "2025-03-01 09:00:00".into(),
            },
        ]
    }

    #[test]
    fn destination_name_embeds_timestamp() {
        let t = Local.with_ymd_and_hms(2025, 3, 5, 9, 30, 15).unwrap();
        assert_eq!(destination_name(t), "scraped_data_20250305_093015.csv");
    }

    #[test]
    fn csv_round_trip_preserves_fields_and_column_order() {
        let path = std::env::temp_dir().join(format!(
            "vacancy_scraper_roundtrip_{}.csv",
            std::process::id()
        ));
        let records = sample_records();
        write_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec![
                "Job Title",
                "Company",
                "Location",
                "Expiry Date",
                "Job Description",
                "Scraped At",
            ])
        );
        let read_back: Vec<JobRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read_back, records);

        std::fs::remove_file(&path).unwrap();
    }
}
