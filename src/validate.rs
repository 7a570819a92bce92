//! Structural validation of candidate fields.
//!
//! These checks run before a candidate reaches a service: they cover the
//! shape of names and phone numbers and the ordering of a slot's time
//! window. Policy checks (session length, capacity) live in the services.

use chrono::NaiveDateTime;

use crate::error::{ServiceError, ServiceResult};

/// A personal name: one or more capitalized words joined by a single
/// space, hyphen or apostrophe.
pub fn validate_name(name: &str) -> ServiceResult<()> {
    if name.is_empty() {
        return Err(ServiceError::InvalidArgument("name is empty".to_string()));
    }

    let mut expect_upper = true;
    let mut prev_was_separator = false;
    for c in name.chars() {
        if expect_upper {
            if !c.is_uppercase() {
                return Err(invalid_name(name));
            }
            expect_upper = false;
            prev_was_separator = false;
        } else if c == ' ' || c == '-' || c == '\'' {
            if prev_was_separator {
                return Err(invalid_name(name));
            }
            expect_upper = true;
            prev_was_separator = true;
        } else if !c.is_lowercase() {
            return Err(invalid_name(name));
        }
    }
    // A trailing separator means the final word never started.
    if expect_upper {
        return Err(invalid_name(name));
    }
    Ok(())
}

fn invalid_name(name: &str) -> ServiceError {
    ServiceError::InvalidArgument(format!("invalid name: {name}"))
}

/// A phone number in one of the accepted national formats:
/// `+7 (DDD) DDD-DD-DD`, `8 (DDD) DDD-DD-DD` or `+375 (DD) DDD-DD-DD`.
pub fn validate_phone(phone: &str) -> ServiceResult<()> {
    let accepted = matches_template(phone, "+7 (###) ###-##-##")
        || matches_template(phone, "8 (###) ###-##-##")
        || matches_template(phone, "+375 (##) ###-##-##")
        || matches_template(phone, "8 (##) ###-##-##");
    if accepted {
        Ok(())
    } else {
        Err(ServiceError::InvalidArgument(format!(
            "invalid phone number: {phone}"
        )))
    }
}

// `#` matches one ASCII digit, every other template char matches itself.
fn matches_template(value: &str, template: &str) -> bool {
    if value.chars().count() != template.chars().count() {
        return false;
    }
    value.chars().zip(template.chars()).all(|(v, t)| {
        if t == '#' {
            v.is_ascii_digit()
        } else {
            v == t
        }
    })
}

/// A slot's window must end after it starts.
pub fn validate_time_window(start: NaiveDateTime, end: NaiveDateTime) -> ServiceResult<()> {
    if end <= start {
        return Err(ServiceError::InvalidArgument(format!(
            "end time {end} is not after start time {start}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn accepts_simple_and_compound_names() {
        assert!(validate_name("John").is_ok());
        assert!(validate_name("Anna-Maria").is_ok());
        assert!(validate_name("O'Brien").is_ok());
        assert!(validate_name("Van Der Berg").is_ok());
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("john").is_err());
        assert!(validate_name("JOhn").is_err());
        assert!(validate_name("John-").is_err());
        assert!(validate_name("John--Paul").is_err());
        assert!(validate_name("John2").is_err());
    }

    #[test]
    fn accepts_known_phone_formats() {
        assert!(validate_phone("+7 (123) 456-78-90").is_ok());
        assert!(validate_phone("8 (123) 456-78-90").is_ok());
        assert!(validate_phone("+375 (29) 123-45-67").is_ok());
    }

    #[test]
    fn rejects_malformed_phones() {
        assert!(validate_phone("").is_err());
        assert!(validate_phone("+1 (123) 456-78-90").is_err());
        assert!(validate_phone("+7 (123) 456-7890").is_err());
        assert!(validate_phone("+7 (12a) 456-78-90").is_err());
    }

    #[test]
    fn rejects_inverted_time_window() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 26).unwrap();
        let start = day.and_hms_opt(10, 0, 0).unwrap();
        let end = day.and_hms_opt(9, 0, 0).unwrap();
        assert!(validate_time_window(start, end).is_err());
        assert!(validate_time_window(start, start).is_err());
        assert!(validate_time_window(end, start).is_ok());
    }
}
