use chrono::NaiveDate;

/// Input format the listing site uses for expiry dates, e.g. "12 Jan 2025".
const SITE_DATE_FORMAT: &str = "%d %b %Y";

/// Normalize an expiry string to `YYYY-MM-DD`. The site's format is not
/// contractually guaranteed, so anything that fails to parse is passed
/// through unchanged rather than treated as an error.
pub fn normalize(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, SITE_DATE_FORMAT) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_dates_become_iso() {
        assert_eq!(normalize("12 Jan 2025"), "2025-01-12");
        assert_eq!(normalize("05 Mar 2025"), "2025-03-05");
        assert_eq!(normalize("1 Dec 2024"), "2024-12-01");
    }

    #[test]
    fn garbage_passes_through() {
        assert_eq!(normalize("garbage"), "garbage");
        assert_eq!(normalize("Open until filled"), "Open until filled");
    }

    #[test]
    fn empty_passes_through() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn invalid_calendar_dates_pass_through() {
        assert_eq!(normalize("32 Jan 2025"), "32 Jan 2025");
        assert_eq!(normalize("12 Foo 2025"), "12 Foo 2025");
    }
}
