//! Field validation for retail records

use crate::contract::RetailError;
use std::ops::RangeInclusive;
use url::Url;

pub const NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 1_000;
pub const SLOGAN_MAX_LENGTH: usize = 500;
pub const FOUNDED_DATE_MAX_LENGTH: usize = 500;
pub const WEBSITE_MAX_LENGTH: usize = 500;
pub const NUMBER_MAX_LENGTH: usize = 20;
pub const ADDRESS_MAX_LENGTH: usize = 1_000;

/// Valid business hours
pub const HOURS: RangeInclusive<i32> = 0..=23;

const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Validate a required text field: not blank, at most `max_length` characters
pub fn validate_text(field: &str, value: &str, max_length: usize) -> Result<(), RetailError> {
    if value.trim().is_empty() {
        return Err(RetailError::validation(field, "This field may not be blank."));
    }

    if value.chars().count() > max_length {
        return Err(RetailError::validation(
            field,
            format!("Ensure this field has no more than {max_length} characters."),
        ));
    }

    Ok(())
}

/// Validate an absolute web URL
pub fn validate_url(field: &str, value: &str) -> Result<(), RetailError> {
    validate_text(field, value, WEBSITE_MAX_LENGTH)?;

    let valid = Url::parse(value)
        .map(|url| URL_SCHEMES.contains(&url.scheme()) && url.host().is_some())
        .unwrap_or(false);

    if !valid {
        return Err(RetailError::validation(field, "Enter a valid URL."));
    }
    Ok(())
}

/// Validate an hour of the day
pub fn validate_hour(field: &str, hour: i32) -> Result<(), RetailError> {
    if hour < *HOURS.start() {
        return Err(RetailError::validation(
            field,
            format!(
                "Ensure this value is greater than or equal to {}.",
                HOURS.start()
            ),
        ));
    }

    if hour > *HOURS.end() {
        return Err(RetailError::validation(
            field,
            format!("Ensure this value is less than or equal to {}.", HOURS.end()),
        ));
    }

    Ok(())
}
