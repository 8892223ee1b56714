//! Validation for dealer-entered car data.
//!
//! Rules: make/model 1..=50 characters, make restricted to letters and
//! spaces, year between 1900 and next year, photo must be an http(s) URL.

use crate::constants::{CAR_NAME_MAX, CAR_YEAR_MIN};

/// A validated car submission from the add-car modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub photo_url: String,
}

pub fn validate_make(make: &str) -> Result<(), String> {
    let make = make.trim();
    if make.is_empty() || make.chars().count() > CAR_NAME_MAX {
        return Err(format!(
            "Invalid car make. Please enter a make between 1 and {CAR_NAME_MAX} characters."
        ));
    }
    if !make.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err("Car make should contain only letters and spaces.".to_string());
    }
    Ok(())
}

pub fn validate_model(model: &str) -> Result<(), String> {
    let model = model.trim();
    if model.is_empty() || model.chars().count() > CAR_NAME_MAX {
        return Err(format!(
            "Invalid model name. Please enter a model name between 1 and {CAR_NAME_MAX} characters."
        ));
    }
    Ok(())
}

/// Parse and range-check a year entry. `current_year` is passed in so the
/// rule stays a pure function.
pub fn validate_year(year_text: &str, current_year: i32) -> Result<i32, String> {
    let year: i32 = year_text
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid year (numbers only).".to_string())?;
    if year < CAR_YEAR_MIN || year > current_year + 1 {
        return Err(format!(
            "Invalid year. Please enter a year between {CAR_YEAR_MIN} and {}.",
            current_year + 1
        ));
    }
    Ok(year)
}

pub fn validate_photo_url(url: &str) -> Result<(), String> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err("Photo must be a valid http(s) URL.".to_string())
    }
}

/// Validate a full add-car submission, first failure wins.
pub fn parse_new_car(
    make: &str,
    model: &str,
    year_text: &str,
    photo_url: &str,
    current_year: i32,
) -> Result<NewCar, String> {
    validate_make(make)?;
    validate_model(model)?;
    let year = validate_year(year_text, current_year)?;
    validate_photo_url(photo_url)?;
    Ok(NewCar {
        make: make.trim().to_string(),
        model: model.trim().to_string(),
        year,
        photo_url: photo_url.trim().to_string(),
    })
}
