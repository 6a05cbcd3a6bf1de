const MIN_DIGITS: usize = 10;

/// Normalizes a phone cell into bare digits.
///
/// Spreadsheets often hand numbers over in scientific notation
/// (`1.3812345678e+10`); those are expanded. Anything else keeps only its
/// digits and is dropped when fewer than ten remain.
pub(crate) fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }

    if trimmed.to_ascii_lowercase().contains("e+") {
        let value = trimmed.parse::<f64>().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        return Some(format!("{:.0}", value.trunc()));
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    (digits.len() >= MIN_DIGITS).then_some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_scientific_notation() {
        assert_eq!(
            normalize_phone("1.3812345678e+10").as_deref(),
            Some("13812345678")
        );
        assert_eq!(
            normalize_phone("1.3812345678E+10").as_deref(),
            Some("13812345678")
        );
    }

    #[test]
    fn strips_separators() {
        assert_eq!(
            normalize_phone("138-1234-5678").as_deref(),
            Some("13812345678")
        );
        assert_eq!(
            normalize_phone(" +86 010 8888 6666 ").as_deref(),
            Some("8601088886666")
        );
    }

    #[test]
    fn rejects_short_or_missing_numbers() {
        assert_eq!(normalize_phone("12345"), None);
        assert_eq!(normalize_phone("nan"), None);
        assert_eq!(normalize_phone("  "), None);
        assert_eq!(normalize_phone("abc e+ def"), None);
    }
}
