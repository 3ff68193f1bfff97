//! The user records read from the input file.

use crate::error::{GenerateError, Result};
use serde::Deserialize;
use serde_json::{Number, Value};
use std::{fs, path::Path};

/// The JSON keys every record must carry, in constructor argument order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "UserType",
    "EnergyBalance",
    "Price",
    "Classification",
    "Radian",
];

/// One user's energy trading attributes.
///
/// Numbers keep their source text so values wider than 64 bits reach the
/// 256-bit Solidity fields unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    /// Copied verbatim into a string literal.
    pub user_type: String,
    /// Signed, rendered into an `int`.
    pub energy_balance: Number,
    /// The remaining fields are unsigned, rendered into a `uint`.
    pub price: Number,
    pub classification: Number,
    pub radian: Number,
}

impl UserRecord {
    /// Check that every numeric field is an integer literal its Solidity type can hold.
    fn check_integers(&self) -> core::result::Result<(), String> {
        check_integer("EnergyBalance", &self.energy_balance, true)?;
        check_integer("Price", &self.price, false)?;
        check_integer("Classification", &self.classification, false)?;
        check_integer("Radian", &self.radian, false)
    }
}

fn check_integer(field: &str, number: &Number, signed: bool) -> core::result::Result<(), String> {
    let text = number.to_string();
    let digits = match text.strip_prefix('-') {
        Some(_) if !signed => {
            return Err(format!("`{field}` must not be negative, found {text}"));
        }
        Some(digits) => digits,
        None => text.as_str(),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("`{field}` must be an integer, found {text}"));
    }
    Ok(())
}

/// Read and parse the records at `path`, preserving file order.
pub fn load_records(path: &Path) -> Result<Vec<UserRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| GenerateError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", contents.len(), path.display());
    parse_records(&contents, path)
}

/// Parse `contents` as a JSON array of user records.
///
/// `path` is only used to label errors.
pub fn parse_records(contents: &str, path: &Path) -> Result<Vec<UserRecord>> {
    let malformed = |reason: String| GenerateError::InputMalformed {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_str(contents).map_err(|err| malformed(err.to_string()))?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(malformed(format!(
                "expected an array of user records, found {}",
                kind_of(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let Value::Object(fields) = &entry else {
                return Err(malformed(format!(
                    "user record #{index} is {}, expected an object",
                    kind_of(&entry)
                )));
            };
            if let Some(&field) = REQUIRED_FIELDS
                .iter()
                .find(|field| !fields.contains_key(**field))
            {
                return Err(GenerateError::FieldMissing {
                    path: path.to_path_buf(),
                    index,
                    field,
                });
            }
            let record: UserRecord = serde_json::from_value(entry)
                .map_err(|err| malformed(format!("user record #{index}: {err}")))?;
            record
                .check_integers()
                .map_err(|reason| malformed(format!("user record #{index}: {reason}")))?;
            Ok(record)
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
