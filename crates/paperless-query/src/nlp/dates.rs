//! Date expression recognition for German and English text
//!
//! Finds the earliest date expression in a text. Expressions without a day
//! resolve to the first of the month; expressions without a year use the year
//! of the reference date.

use chrono::{Datelike, Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Month names and abbreviations. Abbreviations may carry a trailing period.
const MONTHS: &[(&str, u32)] = &[
    ("januar", 1), ("jänner", 1), ("january", 1), ("jan", 1),
    ("februar", 2), ("february", 2), ("feb", 2),
    ("märz", 3), ("maerz", 3), ("march", 3), ("mär", 3), ("mrz", 3), ("mar", 3),
    ("april", 4), ("apr", 4),
    ("mai", 5), ("may", 5),
    ("juni", 6), ("june", 6), ("jun", 6),
    ("juli", 7), ("july", 7), ("jul", 7),
    ("august", 8), ("aug", 8),
    ("september", 9), ("sept", 9), ("sep", 9),
    ("oktober", 10), ("october", 10), ("okt", 10), ("oct", 10),
    ("november", 11), ("nov", 11),
    ("dezember", 12), ("december", 12), ("dez", 12), ("dec", 12),
];

/// Month words that stand alone as a date. Abbreviations and "may" are left
/// out: on their own they are more often something else.
const STANDALONE_MONTHS: &[&str] = &[
    "januar", "jänner", "january", "februar", "february", "märz", "maerz", "march", "april",
    "mai", "juni", "june", "juli", "july", "august", "september", "oktober", "october",
    "november", "dezember", "december",
];

/// Relative day words and their offset from the reference date
const RELATIVE_DAYS: &[(&str, i64)] = &[
    ("vorgestern", -2),
    ("gestern", -1),
    ("yesterday", -1),
    ("heute", 0),
    ("today", 0),
    ("morgen", 1),
    ("tomorrow", 1),
    ("übermorgen", 2),
];

fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.collect();
    // Longest first so "märz" wins over "mär"
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

static MONTH_ALT: Lazy<String> = Lazy::new(|| alternation(MONTHS.iter().map(|(name, _)| *name)));

static ISO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid ISO date pattern"));

static DOTTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4}|\d{2})\b").expect("valid dotted date pattern")
});

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})\.?\s+({})\.?\s+(\d{{4}})\b",
        *MONTH_ALT
    ))
    .expect("valid day-month-year pattern")
});

static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b",
        *MONTH_ALT
    ))
    .expect("valid month-day-year pattern")
});

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({})\.?\s+(\d{{4}})\b", *MONTH_ALT))
        .expect("valid month-year pattern")
});

static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(\d{{1,2}})\.?\s+({})\b", *MONTH_ALT))
        .expect("valid day-month pattern")
});

static MONTH_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({})\b",
        alternation(STANDALONE_MONTHS.iter().copied())
    ))
    .expect("valid month pattern")
});

static RELATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({})\b",
        alternation(RELATIVE_DAYS.iter().map(|(word, _)| *word))
    ))
    .expect("valid relative-day pattern")
});

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == lower)
        .map(|(_, number)| *number)
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    Some(match raw.len() {
        2 if year < 69 => 2000 + year,
        2 => 1900 + year,
        _ => year,
    })
}

/// A recognised date and where it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    start: usize,
    len: usize,
    date: NaiveDate,
}

/// Recognises date expressions in free text
#[derive(Debug, Clone, Default)]
pub struct DateExpressionParser {
    /// Date that relative and year-less expressions resolve against; today when unset
    reference: Option<NaiveDate>,
}

impl DateExpressionParser {
    /// Parser resolving against the current local date
    pub fn new() -> Self {
        Self { reference: None }
    }

    /// Parser resolving against a fixed date
    pub fn with_reference_date(reference: NaiveDate) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn reference_date(&self) -> NaiveDate {
        self.reference.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Earliest valid date expression in `text`; on equal start the longer match wins
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let reference = self.reference_date();
        let mut candidates = Vec::new();

        collect(&mut candidates, &ISO, text, |c| {
            NaiveDate::from_ymd_opt(number(c, 1)?, number(c, 2)?, number(c, 3)?)
        });
        collect(&mut candidates, &DOTTED, text, |c| {
            NaiveDate::from_ymd_opt(expand_year(c.get(3)?.as_str())?, number(c, 2)?, number(c, 1)?)
        });
        collect(&mut candidates, &DAY_MONTH_YEAR, text, |c| {
            NaiveDate::from_ymd_opt(number(c, 3)?, month_number(c.get(2)?.as_str())?, number(c, 1)?)
        });
        collect(&mut candidates, &MONTH_DAY_YEAR, text, |c| {
            NaiveDate::from_ymd_opt(number(c, 3)?, month_number(c.get(1)?.as_str())?, number(c, 2)?)
        });
        collect(&mut candidates, &MONTH_YEAR, text, |c| {
            NaiveDate::from_ymd_opt(number(c, 2)?, month_number(c.get(1)?.as_str())?, 1)
        });
        collect(&mut candidates, &DAY_MONTH, text, |c| {
            NaiveDate::from_ymd_opt(reference.year(), month_number(c.get(2)?.as_str())?, number(c, 1)?)
        });
        collect(&mut candidates, &MONTH_ONLY, text, |c| {
            NaiveDate::from_ymd_opt(reference.year(), month_number(c.get(1)?.as_str())?, 1)
        });
        collect(&mut candidates, &RELATIVE, text, |c| {
            let word = c.get(1)?.as_str().to_lowercase();
            let (_, offset) = RELATIVE_DAYS.iter().find(|(w, _)| *w == word)?;
            reference.checked_add_signed(Duration::days(*offset))
        });

        candidates
            .into_iter()
            .min_by_key(|c| (c.start, std::cmp::Reverse(c.len)))
            .map(|c| c.date)
    }
}

fn collect(
    candidates: &mut Vec<Candidate>,
    pattern: &Regex,
    text: &str,
    resolve: impl Fn(&Captures<'_>) -> Option<NaiveDate>,
) {
    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if let Some(date) = resolve(&caps) {
            candidates.push(Candidate {
                start: whole.start(),
                len: whole.len(),
                date,
            });
        }
    }
}
