//! French date formatting for templates
//!
//! Renders ISO dates the way `toLocaleDateString('fr-FR', { day, month: 'long', year })`
//! does: `5 mars 2024`.

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Calendar date (proleptic Gregorian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchoolDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SchoolDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parse `YYYY-MM-DD`, ignoring any time part after `T` or a space
    pub fn parse_iso(input: &str) -> Option<Self> {
        let date = input.trim().split(['T', ' ']).next()?;
        let mut parts = date.split('-');
        let year = parts.next()?;
        let month = parts.next()?;
        let day = parts.next()?;
        if parts.next().is_some() || year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS_FR[(self.month - 1) as usize]
    }

    /// `15 mars 2024`
    pub fn to_french_long(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Format an ISO date string in French, `None` if it is not a valid date
pub fn format_date_fr(input: &str) -> Option<String> {
    SchoolDate::parse_iso(input).map(|d| d.to_french_long())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_fr() {
        assert_eq!(format_date_fr("2024-03-05").as_deref(), Some("5 mars 2024"));
        assert_eq!(format_date_fr("2023-08-01").as_deref(), Some("1 août 2023"));
        assert_eq!(format_date_fr("2024-12-25T08:30:00").as_deref(), Some("25 décembre 2024"));
        assert_eq!(format_date_fr(" 2025-01-15 10:00 ").as_deref(), Some("15 janvier 2025"));
    }

    #[test]
    fn test_leap_years() {
        assert!(SchoolDate::parse_iso("2024-02-29").is_some());
        assert!(SchoolDate::parse_iso("2000-02-29").is_some());
        assert!(SchoolDate::parse_iso("1900-02-29").is_none());
        assert!(SchoolDate::parse_iso("2023-02-29").is_none());
    }

    #[test]
    fn test_invalid_dates() {
        for input in ["", "2024", "2024-13-01", "2024-04-31", "2024-4-1", "24-04-01", "2024-04-01-02", "abcd-ef-gh"] {
            assert_eq!(format_date_fr(input), None, "{input}");
        }
    }
}
