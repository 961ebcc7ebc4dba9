use chrono::{NaiveDate, NaiveTime};

/// Time-of-day formats accepted in catalogs, most specific first.
const TIME_FORMATS: [&str; 3] = ["%I:%M %p", "%I:%M%p", "%H:%M"];

/// Date formats accepted for project due dates.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"];

/// Parse a display time like "09:00 AM", "9:30pm" or "14:00".
///
/// Returns `None` for anything else so callers decide how to surface it.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

/// Parse a calendar date in ISO form ("2023-07-15") or display form ("Jul 15, 2023").
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// "09:00 AM"
pub fn format_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// "Jul 15, 2023"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "July 15, 2023"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "July 15"
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// Avatar fallback: first letter of each name part.
///
/// Example: "Sarah Johnson" → "SJ"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Case-insensitive substring test. `needle` must already be lowercased.
pub fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Serde adapter for "09:00 AM" style times.
pub mod display_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw:?}")))
    }
}

/// Serde adapter for dates written either as ISO or as "Jul 15, 2023".
/// Always serializes as ISO.
pub mod flexible_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_of_day_meridiem() {
        assert_eq!(
            parse_time_of_day("09:00 AM"),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(
            parse_time_of_day("02:00 PM"),
            NaiveTime::from_hms_opt(14, 0, 0)
        );
        assert_eq!(
            parse_time_of_day("12:30 AM"),
            NaiveTime::from_hms_opt(0, 30, 0)
        );
        assert_eq!(
            parse_time_of_day("11:59 PM"),
            NaiveTime::from_hms_opt(23, 59, 0)
        );
    }

    #[test]
    fn test_parse_time_of_day_24h_and_garbage() {
        assert_eq!(parse_time_of_day("14:15"), NaiveTime::from_hms_opt(14, 15, 0));
        assert_eq!(parse_time_of_day("lunchtime"), None);
        assert_eq!(parse_time_of_day(""), None);
    }

    #[test]
    fn test_parse_date_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2023, 7, 15);
        assert_eq!(parse_date("2023-07-15"), expected);
        assert_eq!(parse_date("Jul 15, 2023"), expected);
        assert_eq!(parse_date("July 15, 2023"), expected);
        assert_eq!(parse_date("Jul 8, 2023"), NaiveDate::from_ymd_opt(2023, 7, 8));
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_display_formats() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 8).unwrap();
        assert_eq!(format_short_date(date), "Jul 8, 2023");
        assert_eq!(format_long_date(date), "July 8, 2023");
        assert_eq!(format_month_day(date), "July 8");
        let time = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
        assert_eq!(format_time(time), "03:00 PM");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("System"), "S");
        assert_eq!(initials("  "), "");
    }
}
