use crate::errors::ReddModelsError;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a string field, defaulting to empty if it is absent or not a string
pub fn get_str(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Read a float field, defaulting to `0.0` if it is absent or not a number
pub fn get_f64(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or_default()
}

/// Read an integer field, defaulting to `0` if it is absent or not an integer
pub fn get_i64(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or_default()
}

/// Read an array field; anything other than an array reads as zero-length
pub fn get_array<'v>(value: &'v Value, key: &str) -> &'v [Value] {
    match value.get(key) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// Function that masks sensitive data such as access and refresh tokens
pub fn mask_sensitive(word: &str) -> String {
    let word_length = word.chars().count();
    if word.is_empty() {
        String::from("<EMPTY>")
    } else if word_length <= 3 {
        "*".repeat(word_length)
    } else {
        // keep the first two and the last characters
        word.chars()
            .enumerate()
            .map(|(i, c)| if i < 2 || i == word_length - 1 { c } else { '*' })
            .collect()
    }
}

/// Read a raw JSON payload from a file, or from stdin if no path is given
pub fn read_payload(path: Option<&Path>) -> Result<String, ReddModelsError> {
    let payload = match path {
        Some(p) => {
            debug!("Reading payload from {}", p.display());
            fs::read_to_string(p)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(payload)
}
