// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Compact `YYYYMMDD` dates used in project frontmatter.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Error;

/// A frontmatter date such as `20240307`.
///
/// Ordering follows the calendar, which for the compact form is the same as
/// ordering the raw strings. Gallery sorting and the site freshness line
/// both rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompactDate(NaiveDate);

impl FromStr for CompactDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono's numeric fields are flexible-width, so the shape must be
        // pinned to exactly eight digits before the calendar check.
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDate { value: s.to_string() });
        }
        NaiveDate::parse_from_str(s, "%Y%m%d")
            .map(CompactDate)
            .map_err(|_| Error::InvalidDate { value: s.to_string() })
    }
}

impl CompactDate {
    /// Gallery card form: `Mar 2024`.
    pub fn month_year(&self) -> String {
        self.0.format("%b %Y").to_string()
    }

    /// Detail page form: `Mar 7, 2024` (day without zero padding).
    pub fn full(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }

    /// The raw `YYYYMMDD` form, as written in frontmatter.
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for CompactDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format() {
        let date: CompactDate = "20240307".parse().expect("valid date");
        assert_eq!(date.month_year(), "Mar 2024");
        assert_eq!(date.full(), "Mar 7, 2024");
        assert_eq!(date.compact(), "20240307");
    }

    #[test]
    fn two_digit_day_is_not_padded_differently() {
        let date: CompactDate = "20231215".parse().expect("valid date");
        assert_eq!(date.full(), "Dec 15, 2023");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("2024037".parse::<CompactDate>().is_err()); // seven digits
        assert!("20241399".parse::<CompactDate>().is_err()); // month 13
        assert!("20240230".parse::<CompactDate>().is_err()); // Feb 30
        assert!("yesterday".parse::<CompactDate>().is_err());
        assert!("20240307x".parse::<CompactDate>().is_err()); // trailing junk
        assert!("2024-3-7".parse::<CompactDate>().is_err()); // eight chars, not digits
        assert!("202400307".parse::<CompactDate>().is_err()); // nine digits
    }

    #[test]
    fn error_carries_offending_value() {
        let err = "20241399".parse::<CompactDate>().expect_err("invalid month");
        assert!(err.to_string().contains("20241399"));
    }

    #[test]
    fn ordering_follows_calendar() {
        let a: CompactDate = "20230101".parse().expect("valid");
        let b: CompactDate = "20240307".parse().expect("valid");
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }
}
