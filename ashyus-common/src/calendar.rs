use chrono::{Datelike, NaiveDate};

/// How often an open page re-checks the date
pub const THEME_REFRESH_MS: u64 = 60 * 60 * 1000;

/// Seasonal decoration applied to the whole site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayTheme {
    Christmas,
    NewYear,
    Normal,
}

#[allow(clippy::derivable_impls)]
impl Default for HolidayTheme {
    fn default() -> Self {
        HolidayTheme::Normal
    }
}

impl HolidayTheme {
    /// Christmas runs 1-30 December, New Year covers 31 December and 1 January.
    pub fn for_date(date: NaiveDate) -> Self {
        match (date.month(), date.day()) {
            (12, 1..=30) => HolidayTheme::Christmas,
            (12, 31) | (1, 1) => HolidayTheme::NewYear,
            _ => HolidayTheme::Normal,
        }
    }

    pub fn today() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    /// The theme for `date` if it differs from the current one.
    pub fn changed_on(self, date: NaiveDate) -> Option<Self> {
        let next = Self::for_date(date);
        (next != self).then_some(next)
    }

    /// CSS class placed on the root container
    pub fn css_class(&self) -> &'static str {
        match self {
            HolidayTheme::Christmas => "theme-christmas",
            HolidayTheme::NewYear => "theme-newyear",
            HolidayTheme::Normal => "theme-normal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn december_is_christmas_until_the_30th() {
        assert_eq!(HolidayTheme::for_date(date(12, 1)), HolidayTheme::Christmas);
        assert_eq!(HolidayTheme::for_date(date(12, 30)), HolidayTheme::Christmas);
    }

    #[test]
    fn new_year_spans_the_turn_of_the_year() {
        assert_eq!(HolidayTheme::for_date(date(12, 31)), HolidayTheme::NewYear);
        assert_eq!(HolidayTheme::for_date(date(1, 1)), HolidayTheme::NewYear);
    }

    #[test]
    fn rest_of_year_is_normal() {
        assert_eq!(HolidayTheme::for_date(date(1, 2)), HolidayTheme::Normal);
        assert_eq!(HolidayTheme::for_date(date(11, 30)), HolidayTheme::Normal);
        assert_eq!(HolidayTheme::Normal.css_class(), "theme-normal");
    }

    #[test]
    fn open_page_switches_theme_at_new_years_eve() {
        let theme = HolidayTheme::for_date(date(12, 30));
        assert_eq!(theme.changed_on(date(12, 30)), None);
        assert_eq!(theme.changed_on(date(12, 31)), Some(HolidayTheme::NewYear));
        assert_eq!(
            HolidayTheme::NewYear.changed_on(date(1, 2)),
            Some(HolidayTheme::Normal)
        );
    }
}
