//! Experience estimator: years of experience from explicit statements or
//! from the spread of employment date ranges.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Explicit statements are capped here.
pub const MAX_EXPLICIT_YEARS: u32 = 30;
/// Date spans above this are discarded as noise.
pub const MAX_SPAN_YEARS: i32 = 50;
/// Earliest year accepted in a date range.
pub const MIN_VALID_YEAR: i32 = 1970;

/// "3 years", "5+ years", "1 year"
static EXPLICIT_YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*\+?\s*years?").expect("explicit years regex")
});

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// "2019 - 2022", "Jan 2020 – Present", "May 2008 — Sept 2008", "2018 - till date"
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i){MONTH}?\s*([0-9]{{4}})\s*[-–—]\s*(?:{MONTH}?\s*([0-9]{{4}})|present|current|now|till\s*date)"
    );
    Regex::new(&pattern).expect("date range regex")
});

/// Estimates years of experience in `text`, `None` when nothing usable is found.
///
/// An explicit "N years" statement always wins (largest N, capped). Otherwise
/// every valid start/end year of every date range is pooled and the spread
/// between earliest and latest is returned if it is positive and plausible.
pub fn estimate_experience_years(text: &str, current_year: i32) -> Option<u32> {
    explicit_years(text).or_else(|| date_span_years(text, current_year))
}

fn explicit_years(text: &str) -> Option<u32> {
    EXPLICIT_YEARS_RE
        .captures_iter(text)
        .map(|caps| {
            caps[1]
                .parse::<u64>()
                .map(|n| n.min(MAX_EXPLICIT_YEARS as u64) as u32)
                .unwrap_or(MAX_EXPLICIT_YEARS)
        })
        .max()
}

fn date_span_years(text: &str, current_year: i32) -> Option<u32> {
    let valid = |year: i32| (MIN_VALID_YEAR..=current_year).contains(&year);

    let mut years: BTreeSet<i32> = BTreeSet::new();
    for caps in DATE_RANGE_RE.captures_iter(text) {
        let Ok(start) = caps[1].parse::<i32>() else {
            continue;
        };
        let end = match caps.get(2) {
            Some(m) => match m.as_str().parse::<i32>() {
                Ok(y) => y,
                Err(_) => continue,
            },
            None => current_year,
        };
        if valid(start) && valid(end) {
            years.insert(start);
            years.insert(end);
        }
    }

    let (min, max) = (*years.first()?, *years.last()?);
    let span = max - min;
    if span > 0 && span <= MAX_SPAN_YEARS {
        u32::try_from(span).ok()
    } else {
        None
    }
}
