// src/domain/prediction.rs

use chrono::NaiveDate;
use std::collections::HashMap;

pub const MAX_ADDRESS_LEN: usize = 100;

/// Raw values of the rent-prediction form, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub rooms: String,
    pub bathrooms: String,
    pub address: String,
    pub postal_code: String,
    pub move_in_date: String,
    pub size_sqft: String,

    pub den_included: bool,
    pub parking_included: bool,
    pub heat_included: bool,
    pub electricity_included: bool,
    pub dogs_allowed: bool,
    pub cats_allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl PredictionForm {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| params.get(key).cloned().unwrap_or_default();
        // Unchecked boxes are simply absent from a form post.
        let flag = |key: &str| params.get(key).is_some_and(|v| v != "false" && v != "off");

        PredictionForm {
            rooms: text("rooms"),
            bathrooms: text("bathrooms"),
            address: text("address"),
            postal_code: text("postal_code"),
            move_in_date: text("move_in_date"),
            size_sqft: text("size_sqft"),
            den_included: flag("den_included"),
            parking_included: flag("parking_included"),
            heat_included: flag("heat_included"),
            electricity_included: flag("electricity_included"),
            dogs_allowed: flag("dogs_allowed"),
            cats_allowed: flag("cats_allowed"),
        }
    }

    /// Every failing field, in form order. Empty means the form is valid.
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !is_positive_integer(&self.rooms) {
            errors.push(FieldError {
                field: "rooms",
                message: "Number of rooms must be a positive integer",
            });
        }
        if !is_positive_half_step(&self.bathrooms) {
            errors.push(FieldError {
                field: "bathrooms",
                message: "Number of bathrooms must be in increments of 0.5",
            });
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError {
                field: "address",
                message: "Address is required",
            });
        } else if self.address.chars().count() > MAX_ADDRESS_LEN {
            errors.push(FieldError {
                field: "address",
                message: "Address can be up to 100 characters long",
            });
        }
        if !is_canadian_postal_code(&self.postal_code) {
            errors.push(FieldError {
                field: "postal_code",
                message: "Invalid Canadian postal code",
            });
        }
        if !is_on_or_after(&self.move_in_date, today) {
            errors.push(FieldError {
                field: "move_in_date",
                message: "Date must be in the future",
            });
        }
        if !parse_number(&self.size_sqft).is_some_and(|n| n > 0.0) {
            errors.push(FieldError {
                field: "size_sqft",
                message: "Size must be a positive number",
            });
        }

        errors
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_positive_integer(raw: &str) -> bool {
    parse_number(raw).is_some_and(|n| n > 0.0 && n.fract() == 0.0)
}

fn is_positive_half_step(raw: &str) -> bool {
    parse_number(raw).is_some_and(|n| n > 0.0 && (n * 2.0).fract() == 0.0)
}

/// `A1A 1A1`, with an optional single space or hyphen in the middle.
fn is_canadian_postal_code(raw: &str) -> bool {
    let chars: Vec<char> = raw.chars().collect();
    let (fsa, ldu) = match chars.len() {
        6 => (&chars[..3], &chars[3..]),
        7 if chars[3] == ' ' || chars[3] == '-' => (&chars[..3], &chars[4..]),
        _ => return false,
    };

    fsa[0].is_ascii_alphabetic()
        && fsa[1].is_ascii_digit()
        && fsa[2].is_ascii_alphabetic()
        && ldu[0].is_ascii_digit()
        && ldu[1].is_ascii_alphabetic()
        && ldu[2].is_ascii_digit()
}

fn is_on_or_after(raw: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").is_ok_and(|d| d >= today)
}
