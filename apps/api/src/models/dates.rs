//! Serde helpers for the calendar dates the extractors hand back.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `Option<NaiveDate>` that reads `null`, `""` and `"YYYY-MM-DD"`.
///
/// Models leave optional dates blank far more often than they omit them.
pub mod optional {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}

/// Formats a date the way the markdown writer shows durations ("Jan 2020").
pub fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "optional")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let h: Holder = serde_json::from_str(r#"{"date": ""}"#).unwrap();
        assert!(h.date.is_none());
    }

    #[test]
    fn test_null_and_missing_are_none() {
        let h: Holder = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert!(h.date.is_none());
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.date.is_none());
    }

    #[test]
    fn test_iso_date_parses() {
        let h: Holder = serde_json::from_str(r#"{"date": "2024-12-31"}"#).unwrap();
        assert_eq!(h.date, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"date": "next spring"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_back_to_iso() {
        let h = Holder {
            date: NaiveDate::from_ymd_opt(2021, 3, 15),
        };
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"date":"2021-03-15"}"#);
    }

    #[test]
    fn test_month_year() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(month_year(d), "Jan 2020");
    }
}
