// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, RenderResult};
use crate::value::{ConfigValue, Origin, ValueKind};

/// Converts a JSON document into a configuration document,
/// attaching `origin` to every value in it.
///
/// Integers that fit into an `i64` are kept as [`ValueKind::Int`];
/// all other numbers become [`ValueKind::Double`].
/// NOTE That unsigned integers above `i64::MAX` therefore lose precision,
/// e.g. `18446744073709551615` is rendered back as `1.8446744073709552e19`.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedNumber`] if a number can be represented
/// neither as `i64` nor as `f64`.
pub fn from_json(json: &Value, origin: &Origin) -> RenderResult<ConfigValue> {
    let kind = match json {
        Value::Null => ValueKind::Null,
        Value::Bool(boolean) => ValueKind::Bool(*boolean),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                ValueKind::Int(int)
            } else if let Some(double) = number.as_f64() {
                if number.is_u64() {
                    tracing::debug!("Storing {number} as double, which may lose precision");
                }
                ValueKind::Double(double)
            } else {
                return Err(Error::UnsupportedNumber(number.to_string()));
            }
        }
        Value::String(string) => ValueKind::String(string.clone()),
        Value::Array(elements) => ValueKind::List(
            elements
                .iter()
                .map(|element| from_json(element, origin))
                .collect::<RenderResult<_>>()?,
        ),
        Value::Object(members) => ValueKind::Object(
            members
                .iter()
                .map(|(key, member)| from_json(member, origin).map(|value| (key.clone(), value)))
                .collect::<RenderResult<_>>()?,
        ),
    };
    Ok(ConfigValue::new(kind).with_origin(origin.clone()))
}

/// Reads and parses a JSON file;
/// every value gets the file path as its origin.
///
/// # Errors
///
/// Fails if the file does not exist, can not be read,
/// does not contain valid JSON,
/// or contains a number that can not be represented.
pub fn load_json_file(path: &Path) -> RenderResult<ConfigValue> {
    if !path.is_file() {
        return Err(Error::InputFileDoesNotExist(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|err| Error::FailedToReadInputFile(path.to_path_buf(), err))?;
    let json: Value = serde_json::from_str(&content)
        .map_err(|err| Error::InvalidJson(path.to_path_buf(), err))?;
    tracing::debug!("Loaded JSON from {}", path.display());
    from_json(&json, &Origin::new(path.display().to_string()))
}
