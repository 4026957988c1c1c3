//! Inspector Configuration
//!
//! Read from environment variables (a `.env` file is loaded first by `main`).

use std::env::VarError;

use error_kernel::{CodeType, ErrorResult};

use crate::domain::InspectErrc;

/// Output format for domain reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> ErrorResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(InspectErrc::InvalidFormat.into()),
        }
    }
}

/// Inspector configuration
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Report format (`INSPECT_FORMAT`)
    pub format: OutputFormat,
    /// Escalate one code per domain and catch it (`INSPECT_ESCALATE`)
    pub escalate: bool,
    /// Code looked up in every domain (`INSPECT_LOOKUP_CODE`)
    pub lookup_code: CodeType,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            escalate: false,
            lookup_code: 9999,
        }
    }
}

impl InspectConfig {
    /// Load from the process environment
    pub fn from_env() -> ErrorResult<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Load using `lookup` to resolve variables
    ///
    /// Unset variables keep their defaults. A value that is not valid
    /// Unicode is rejected with the same code as an unparsable one.
    pub fn from_lookup<F>(lookup: F) -> ErrorResult<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let defaults = Self::default();

        let format = match read_var(&lookup, "INSPECT_FORMAT", InspectErrc::InvalidFormat)? {
            Some(value) => OutputFormat::parse(&value)?,
            None => defaults.format,
        };

        let escalate = match read_var(&lookup, "INSPECT_ESCALATE", InspectErrc::InvalidFlag)? {
            Some(value) => parse_flag(&value)?,
            None => defaults.escalate,
        };

        let lookup_code = match read_var(&lookup, "INSPECT_LOOKUP_CODE", InspectErrc::InvalidCode)? {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| InspectErrc::InvalidCode)?,
            None => defaults.lookup_code,
        };

        Ok(Self {
            format,
            escalate,
            lookup_code,
        })
    }
}

fn read_var<F>(lookup: &F, key: &str, invalid: InspectErrc) -> ErrorResult<Option<String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(invalid.into()),
    }
}

/// Accepts `true`/`false`/`1`/`0`, case-insensitive
fn parse_flag(value: &str) -> ErrorResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(InspectErrc::InvalidFlag.into()),
    }
}
