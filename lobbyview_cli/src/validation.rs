//! Checks applied to command-line input before any request is sent.

use chrono::NaiveDate;

pub const MAX_SEARCH_LENGTH: usize = 100;

/// Rejected command-line input.
#[derive(Debug, thiserror::Error)]
#[error("Invalid input: {0}")]
pub struct InvalidInput(String);

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, InvalidInput> {
    if input.len() > max_len {
        return Err(InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(InvalidInput("input is empty after sanitization".to_string()));
    }
    Ok(sanitized)
}

/// Validate a name, text or identifier filter.
pub fn validate_text(input: &str) -> Result<String, InvalidInput> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a chamber: case-insensitive, supports house/senate. Returns `H` or `S`.
pub fn validate_chamber(input: &str) -> Result<String, InvalidInput> {
    match input.trim().to_lowercase().as_str() {
        "house" | "h" => Ok("H".to_string()),
        "senate" | "s" => Ok("S".to_string()),
        _ => Err(InvalidInput(format!(
            "unknown chamber '{}'. Valid values: house (h), senate (s)",
            input
        ))),
    }
}

/// Validate a gender: case-insensitive, supports shorthand f/m. Returns `F` or `M`.
pub fn validate_gender(input: &str) -> Result<String, InvalidInput> {
    match input.trim().to_lowercase().as_str() {
        "female" | "f" => Ok("F".to_string()),
        "male" | "m" => Ok("M".to_string()),
        _ => Err(InvalidInput(format!(
            "unknown gender '{}'. Valid values: female (f), male (m)",
            input
        ))),
    }
}

/// Validate a report quarter code (1-4).
pub fn validate_quarter(input: &str) -> Result<String, InvalidInput> {
    let trimmed = input.trim().trim_start_matches(['Q', 'q']);
    match trimmed {
        "1" | "2" | "3" | "4" => Ok(trimmed.to_string()),
        _ => Err(InvalidInput(format!(
            "invalid quarter '{}'. Valid values: 1, 2, 3, 4",
            input
        ))),
    }
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: u32) -> Result<u32, InvalidInput> {
    if page < 1 {
        return Err(InvalidInput("page must be >= 1".to_string()));
    }
    Ok(page)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, InvalidInput> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2017-01-01)",
            trimmed
        ))
    })
}

/// Validate a NAICS code: 2 to 6 digits.
pub fn validate_naics(input: &str) -> Result<String, InvalidInput> {
    let trimmed = input.trim();
    if (2..=6).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(InvalidInput(format!(
            "invalid NAICS code '{}'. Expected 2 to 6 digits (e.g., 511210)",
            input
        )))
    }
}

/// Applies `validate` to an optional argument.
pub fn optional<T>(
    input: Option<&String>,
    validate: impl Fn(&str) -> Result<T, InvalidInput>,
) -> Result<Option<T>, InvalidInput> {
    input.map(|s| validate(s)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Text sanitization --

    #[test]
    fn text_strips_control_chars() {
        assert_eq!(validate_text("Micro\u{7}soft\n").unwrap(), "Microsoft");
    }

    #[test]
    fn text_keeps_inner_spaces() {
        assert_eq!(
            validate_text("  Microsoft Corporation ").unwrap(),
            "Microsoft Corporation"
        );
    }

    #[test]
    fn text_too_long() {
        let long = "a".repeat(MAX_SEARCH_LENGTH + 1);
        assert!(validate_text(&long).is_err());
        assert!(validate_text(&"a".repeat(MAX_SEARCH_LENGTH)).is_ok());
    }

    #[test]
    fn text_empty_after_sanitization() {
        assert!(validate_text("\t\r\n ").is_err());
    }

    // -- Chamber / gender / quarter --

    #[test]
    fn chamber_shorthand_and_full() {
        assert_eq!(validate_chamber("h").unwrap(), "H");
        assert_eq!(validate_chamber("Senate").unwrap(), "S");
        assert!(validate_chamber("joint").is_err());
    }

    #[test]
    fn gender_values() {
        assert_eq!(validate_gender("F").unwrap(), "F");
        assert_eq!(validate_gender("male").unwrap(), "M");
        assert!(validate_gender("x").is_err());
    }

    #[test]
    fn quarter_values() {
        assert_eq!(validate_quarter("4").unwrap(), "4");
        assert_eq!(validate_quarter("q2").unwrap(), "2");
        assert!(validate_quarter("0").is_err());
        assert!(validate_quarter("5").is_err());
    }

    // -- Numbers and dates --

    #[test]
    fn page_must_be_positive() {
        assert!(validate_page(0).is_err());
        assert_eq!(validate_page(3).unwrap(), 3);
    }

    #[test]
    fn date_format() {
        assert_eq!(
            validate_date("1936-08-29").unwrap(),
            NaiveDate::from_ymd_opt(1936, 8, 29).unwrap()
        );
        assert!(validate_date("08/29/1936").is_err());
    }

    #[test]
    fn naics_digits_only() {
        assert_eq!(validate_naics(" 511210 ").unwrap(), "511210");
        assert!(validate_naics("51a210").is_err());
        assert!(validate_naics("5").is_err());
    }

    #[test]
    fn optional_passes_none_through() {
        assert!(optional(None, validate_gender).unwrap().is_none());
        let input = "f".to_string();
        assert_eq!(
            optional(Some(&input), validate_gender).unwrap().as_deref(),
            Some("F")
        );
    }

    #[test]
    fn error_message_is_prefixed() {
        let err = validate_chamber("x").unwrap_err();
        assert!(err.to_string().starts_with("Invalid input: unknown chamber"));
    }
}
