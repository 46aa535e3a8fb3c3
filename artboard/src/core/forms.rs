//! Parsing of free-text answers given while filling in new records.

use chrono::NaiveDate;

/// Literal accepted in place of an optional date.
pub const NULL_ANSWER: &str = "NULL";

/// True for a `y`/`Y` answer; anything else is no.
pub fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("y")
}

/// Parse a `YYYY-MM-DD` answer. With `allow_null`, `NULL` (any case) maps to `None`.
pub fn parse_date_answer(raw: &str, allow_null: bool) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if allow_null && raw.eq_ignore_ascii_case(NULL_ANSWER) {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|err| format!("'{}' is not a YYYY-MM-DD date ({})", raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_is_case_insensitive_and_strict() {
        assert!(is_yes("y"));
        assert!(is_yes(" Y "));
        assert!(!is_yes("yes"));
        assert!(!is_yes(""));
    }

    #[test]
    fn dates_parse_or_null() {
        assert_eq!(
            parse_date_answer("1840-11-14", false),
            Ok(NaiveDate::from_ymd_opt(1840, 11, 14))
        );
        assert_eq!(parse_date_answer("null", true), Ok(None));
        assert!(parse_date_answer("NULL", false).is_err());
        assert!(parse_date_answer("14/11/1840", true).is_err());
    }
}
