use super::price::compile_pattern;
use super::vocabulary::VocabularyError;
use chrono::NaiveDate;
use regex::Regex;
use tracing::trace;

const TABLE: &str = "expiry";

/// Field order of the captured date parts.
#[derive(Debug, Clone, Copy)]
enum DateShape {
    YearMonthDay,
    MonthDayYear,
    YearMonth,
}

/// Finds a certificate expiry date in text. Only forms that carry a year are
/// recognized, so the result never depends on the current date.
#[derive(Debug, Clone)]
pub(crate) struct ExpiryExtractor {
    patterns: Vec<(Regex, DateShape)>,
}

impl ExpiryExtractor {
    pub(crate) fn compile() -> Result<Self, VocabularyError> {
        const PATTERNS: &[(&str, DateShape)] = &[
            (r"(\d{4})-(\d{1,2})-(\d{1,2})", DateShape::YearMonthDay),
            (r"(\d{4})年(\d{1,2})月(\d{1,2})[日号]", DateShape::YearMonthDay),
            (r"(\d{1,2})/(\d{1,2})/(\d{4})", DateShape::MonthDayYear),
            (r"(\d{4})年(\d{1,2})月", DateShape::YearMonth),
        ];

        let patterns = PATTERNS
            .iter()
            .enumerate()
            .map(|(position, (pattern, shape))| {
                compile_pattern(TABLE, position, pattern).map(|regex| (regex, *shape))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub(crate) fn extract(&self, text: &str) -> Option<NaiveDate> {
        for (pattern, shape) in &self.patterns {
            let Some(captures) = pattern.captures(text) else {
                continue;
            };
            let part = |index: usize| {
                captures
                    .get(index)
                    .and_then(|value| value.as_str().parse::<u32>().ok())
            };

            let date = match shape {
                DateShape::YearMonthDay => part(1)
                    .zip(part(2))
                    .zip(part(3))
                    .and_then(|((year, month), day)| ymd(year, month, day)),
                DateShape::MonthDayYear => part(1)
                    .zip(part(2))
                    .zip(part(3))
                    .and_then(|((month, day), year)| ymd(year, month, day)),
                DateShape::YearMonth => part(1)
                    .zip(part(2))
                    .and_then(|(year, month)| ymd(year, month, 1)),
            };

            match date {
                Some(date) => return Some(date),
                None => trace!(?shape, matched = %&captures[0], "skipping impossible expiry date"),
            }
        }

        None
    }
}

fn ymd(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}
