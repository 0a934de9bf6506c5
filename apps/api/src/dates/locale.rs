#![allow(dead_code)]

//! Long-form date rendering per locale.
//!
//! Locales are table entries (month names plus a layout), so a new language
//! is one more `LocaleFormat` in `LOCALES` and callers never branch on it.

use chrono::{Datelike, NaiveDate};

use crate::dates::calc::{parse_date, DateMathError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ar,
    En,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Locale> {
        LOCALES
            .iter()
            .find(|f| f.locale.tag().eq_ignore_ascii_case(tag))
            .map(|f| f.locale)
    }

    pub fn table(self) -> &'static LocaleFormat {
        // Every Locale variant has a LOCALES entry (see test_every_locale_has_a_table).
        LOCALES
            .iter()
            .find(|f| f.locale == self)
            .unwrap_or(&LOCALES[0])
    }
}

/// Anything that can render a calendar date as display text.
pub trait DateFormatter {
    fn format(&self, date: NaiveDate) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `21 مايو 2005`
    DayMonthYear,
    /// `May 21, 2005`
    MonthPaddedDayYear,
}

#[derive(Debug)]
pub struct LocaleFormat {
    pub locale: Locale,
    pub month_names: [&'static str; 12],
    pub layout: Layout,
}

impl DateFormatter for LocaleFormat {
    fn format(&self, date: NaiveDate) -> String {
        let month = self.month_names[date.month0() as usize];
        match self.layout {
            Layout::DayMonthYear => format!("{} {} {}", date.day(), month, date.year()),
            Layout::MonthPaddedDayYear => {
                format!("{} {:02}, {}", month, date.day(), date.year())
            }
        }
    }
}

pub static LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        locale: Locale::Ar,
        month_names: [
            "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر",
            "أكتوبر", "نوفمبر", "ديسمبر",
        ],
        layout: Layout::DayMonthYear,
    },
    LocaleFormat {
        locale: Locale::En,
        month_names: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        layout: Layout::MonthPaddedDayYear,
    },
];

pub fn format_date(date: &str, locale: Locale) -> Result<String, DateMathError> {
    let date = parse_date(date)?;
    Ok(locale.table().format(date))
}

pub fn format_date_ar(date: &str) -> Result<String, DateMathError> {
    format_date(date, Locale::Ar)
}

pub fn format_date_en(date: &str) -> Result<String, DateMathError> {
    format_date(date, Locale::En)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_a_table() {
        for locale in [Locale::Ar, Locale::En] {
            assert_eq!(locale.table().locale, locale);
        }
    }

    #[test]
    fn test_arabic_format() {
        assert_eq!(format_date_ar("2005-05-21").unwrap(), "21 مايو 2005");
        assert_eq!(format_date_ar("2021-02-05").unwrap(), "5 فبراير 2021");
    }

    #[test]
    fn test_english_format_pads_day() {
        assert_eq!(format_date_en("2021-02-05").unwrap(), "February 05, 2021");
        assert_eq!(format_date_en("2005-12-21").unwrap(), "December 21, 2005");
    }

    #[test]
    fn test_format_is_deterministic() {
        for date in ["2000-01-01", "2024-02-29", "1999-12-31"] {
            assert_eq!(format_date_ar(date).unwrap(), format_date_ar(date).unwrap());
            assert_eq!(format_date_en(date).unwrap(), format_date_en(date).unwrap());
        }
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("ar"), Some(Locale::Ar));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_format_rejects_bad_date() {
        assert!(format_date("2021-02-30", Locale::En).is_err());
    }
}
