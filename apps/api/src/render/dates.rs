//! Display formatting for the free-form date strings resumes carry.
//!
//! Input is whatever the user or the AI parser typed. Recognized shapes are
//! reformatted to the preferred month style; anything else is shown as typed.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How months are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `Mar 2021`
    #[default]
    Short,
    /// `March 2021`
    Long,
    /// `03/2021`
    Numeric,
}

impl DateStyle {
    fn month_year(&self) -> &'static str {
        match self {
            DateStyle::Short => "%b %Y",
            DateStyle::Long => "%B %Y",
            DateStyle::Numeric => "%m/%Y",
        }
    }

    fn day_month_year(&self) -> &'static str {
        match self {
            DateStyle::Short => "%d %b %Y",
            DateStyle::Long => "%d %B %Y",
            DateStyle::Numeric => "%d/%m/%Y",
        }
    }
}

const RANGE_SEPARATOR: &str = " - ";

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// `yyyy-MM`, `yyyy/MM` or `yyyyMM`.
fn year_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = if is_digits(s, 6) {
        (&s[..4], &s[4..])
    } else {
        let (year, month) = s.split_once(['-', '/'])?;
        if !is_digits(year, 4) || !is_digits(month, 2) {
            return None;
        }
        (year, month)
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Full dates: ISO, slashed ISO, RFC 3339 timestamps.
fn full_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Month-and-year text such as `Mar 2021`, `march 2021` or `03/2021`.
fn textual_month_year(s: &str) -> Option<NaiveDate> {
    let padded = format!("1 {s}");
    ["%d %b %Y", "%d %B %Y"]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&padded, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("01/{s}"), "%d/%m/%Y").ok())
}

/// Formats one date for display. Empty input gives an empty string.
pub fn format_date(raw: &str, style: DateStyle) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }
    if s.eq_ignore_ascii_case("present") {
        return "Present".to_string();
    }
    if is_digits(s, 4) {
        return s.to_string();
    }
    if let Some(date) = year_month(s).or_else(|| textual_month_year(s)) {
        return date.format(style.month_year()).to_string();
    }
    if let Some(date) = full_date(s) {
        let fmt = if date.day() == 1 {
            style.month_year()
        } else {
            style.day_month_year()
        };
        return date.format(fmt).to_string();
    }
    s.to_string()
}

/// Formats both ends and joins the non-empty ones.
pub fn format_range(start: &str, end: &str, style: DateStyle) -> String {
    [format_date(start, style), format_date(end, style)]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(RANGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_and_year() {
        assert_eq!(format_date("present", DateStyle::Short), "Present");
        assert_eq!(format_date(" PRESENT ", DateStyle::Long), "Present");
        assert_eq!(format_date("2019", DateStyle::Numeric), "2019");
    }

    #[test]
    fn test_year_month_shapes() {
        assert_eq!(format_date("2021-03", DateStyle::Short), "Mar 2021");
        assert_eq!(format_date("2021/03", DateStyle::Long), "March 2021");
        assert_eq!(format_date("202103", DateStyle::Numeric), "03/2021");
    }

    #[test]
    fn test_full_dates() {
        assert_eq!(format_date("2021-03-15", DateStyle::Short), "15 Mar 2021");
        assert_eq!(format_date("2021/03/15", DateStyle::Numeric), "15/03/2021");
        assert_eq!(format_date("2021-03-01", DateStyle::Short), "Mar 2021");
        assert_eq!(format_date("2021-03-15T09:30:00Z", DateStyle::Long), "15 March 2021");
    }

    #[test]
    fn test_textual_month_year() {
        assert_eq!(format_date("Mar 2021", DateStyle::Long), "March 2021");
        assert_eq!(format_date("September 2018", DateStyle::Short), "Sep 2018");
        assert_eq!(format_date("03/2021", DateStyle::Short), "Mar 2021");
    }

    #[test]
    fn test_unparseable_is_verbatim() {
        assert_eq!(format_date("Summer '19", DateStyle::Short), "Summer '19");
        assert_eq!(format_date("2021-13", DateStyle::Short), "2021-13");
        assert_eq!(format_date("", DateStyle::Short), "");
    }

    #[test]
    fn test_range_skips_empty_ends() {
        assert_eq!(
            format_range("2020-01", "present", DateStyle::Short),
            "Jan 2020 - Present"
        );
        assert_eq!(format_range("2020", "", DateStyle::Short), "2020");
        assert_eq!(format_range("", "", DateStyle::Short), "");
    }
}
