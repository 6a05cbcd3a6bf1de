use super::normalizer::fold_case;
use super::vocabulary::{PriceRules, VocabularyError};
use regex::Regex;
use tracing::trace;

const TABLE: &str = "price";
const DIGIT_TABLE: &str = "price digits";

/// Ordered price patterns plus the 万 normalization heuristic.
#[derive(Debug, Clone)]
pub(crate) struct PriceExtractor {
    patterns: Vec<Regex>,
    unit_markers: Vec<String>,
    small_value_threshold: f64,
    multiplier: f64,
    decimal_digit: Regex,
}

impl PriceExtractor {
    pub(crate) fn compile(rules: &PriceRules) -> Result<Self, VocabularyError> {
        if !(rules.multiplier.is_finite() && rules.multiplier > 0.0) {
            return Err(VocabularyError::InvalidMultiplier(rules.multiplier));
        }

        let patterns = rules
            .patterns
            .iter()
            .enumerate()
            .map(|(position, pattern)| compile_pattern(TABLE, position, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let unit_markers = rules
            .unit_markers
            .iter()
            .enumerate()
            .map(|(position, marker)| {
                if marker.trim().is_empty() {
                    Err(VocabularyError::EmptyKeyword {
                        table: TABLE,
                        position,
                    })
                } else {
                    Ok(fold_case(marker))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let decimal_digit =
            Regex::new(r"\A\d\z").map_err(|source| VocabularyError::InvalidPattern {
                table: DIGIT_TABLE,
                position: 0,
                source,
            })?;

        Ok(Self {
            patterns,
            unit_markers,
            small_value_threshold: rules.small_value_threshold,
            multiplier: rules.multiplier,
            decimal_digit,
        })
    }

    /// Returns the amount from the first pattern whose capture parses.
    ///
    /// Digits from any script (fullwidth `２`, Arabic-Indic `٣`) count at their
    /// decimal value. A capture that still is not a number skips to the next
    /// pattern.
    pub(crate) fn extract(&self, text: &str, folded_text: &str) -> Option<f64> {
        let has_unit = self
            .unit_markers
            .iter()
            .any(|marker| folded_text.contains(marker.as_str()));

        for (position, pattern) in self.patterns.iter().enumerate() {
            let Some(raw) = pattern
                .captures(text)
                .and_then(|captures| captures.get(1))
            else {
                continue;
            };

            match self.parse_amount(raw.as_str()) {
                Some(amount) => return Some(self.normalize(amount, has_unit)),
                None => trace!(position, raw = raw.as_str(), "skipping unparsable price capture"),
            }
        }

        None
    }

    fn parse_amount(&self, raw: &str) -> Option<f64> {
        let ascii = raw
            .chars()
            .map(|c| match c {
                '.' => Some('.'),
                c => self.decimal_value(c).and_then(|value| char::from_digit(value, 10)),
            })
            .collect::<Option<String>>()?;

        ascii.parse::<f64>().ok()
    }

    fn decimal_value(&self, c: char) -> Option<u32> {
        if let Some(value) = c.to_digit(10) {
            return Some(value);
        }

        let is_decimal = |c: char| self.decimal_digit.is_match(c.encode_utf8(&mut [0; 4]));
        if !is_decimal(c) {
            return None;
        }

        // Decimal digits are encoded in contiguous runs of ten starting at zero.
        let mut start = u32::from(c);
        while let Some(previous) = start.checked_sub(1).and_then(char::from_u32) {
            if !is_decimal(previous) {
                break;
            }
            start -= 1;
        }

        Some((u32::from(c) - start) % 10)
    }

    // Known heuristic: a genuine absolute price below the threshold is scaled
    // up as if it were quoted in 万.
    fn normalize(&self, amount: f64, has_unit: bool) -> f64 {
        if has_unit || amount < self.small_value_threshold {
            amount * self.multiplier
        } else {
            amount
        }
    }
}

pub(crate) fn compile_pattern(
    table: &'static str,
    position: usize,
    pattern: &str,
) -> Result<Regex, VocabularyError> {
    let regex = Regex::new(pattern).map_err(|source| VocabularyError::InvalidPattern {
        table,
        position,
        source,
    })?;

    if regex.captures_len() < 2 {
        return Err(VocabularyError::MissingCapture {
            table,
            position,
            pattern: pattern.to_string(),
        });
    }

    Ok(regex)
}

pub(crate) fn standard_rules() -> PriceRules {
    PriceRules {
        patterns: [
            r"挂了(\d+\.?\d*)[万w]",
            r"挂.*?(\d+\.?\d*)[万w]",
            r"报价.*?(\d+\.?\d*)[万w]?",
            r"价格.*?(\d+\.?\d*)[万w]?",
            r"(\d+\.?\d*)[万w]",
            r"(\d+\.?\d*)w",
        ]
        .iter()
        .map(|pattern| pattern.to_string())
        .collect(),
        unit_markers: vec!["w".to_string(), "万".to_string()],
        small_value_threshold: 100.0,
        multiplier: 10_000.0,
    }
}
