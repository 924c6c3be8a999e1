// SPDX-License-Identifier: MIT

//! Input loader - decode JSON or YAML documents into values

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, ValidatorError};
use crate::value::Value;

/// Document formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    Json,
    /// YAML also accepts `.nan`, `.inf` and `-.inf`
    #[default]
    Yaml,
}

impl InputFormat {
    /// Pick a format from a file extension, YAML when unknown
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

impl FromStr for InputFormat {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            other => Err(ValidatorError::unsupported_format(other)),
        }
    }
}

/// Decode a single document
pub fn parse_value(content: &str, format: InputFormat) -> Result<Value> {
    let value = match format {
        InputFormat::Json => Value::from(serde_json::from_str::<serde_json::Value>(content)?),
        InputFormat::Yaml => Value::from(serde_yaml::from_str::<serde_yaml::Value>(content)?),
    };
    log::debug!("Decoded {:?} document as {}", format, value.type_name());
    Ok(value)
}

/// Read and decode a document, inferring the format from the extension
/// unless one is given
pub fn load_file<P: AsRef<Path>>(path: P, format: Option<InputFormat>) -> Result<Value> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    log::debug!("Loading {} as {:?}", path.display(), format);
    let content = fs::read_to_string(path)?;
    parse_value(&content, format)
}
