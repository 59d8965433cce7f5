//! Line parser for the module and supervisor catalogues
//!
//! Each catalogue is plain text with one comma-separated record per line.
//! There is no header row and no escaping; blank lines are ignored.

use crate::core::error::LoadError;
use crate::core::models::{Module, Supervisor};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Module catalogue shipped with the binary
pub const BUNDLED_MODULES: &str = include_str!("../../assets/modules.csv");

/// Supervisor catalogue shipped with the binary
pub const BUNDLED_SUPERVISORS: &str = include_str!("../../assets/supervisors.csv");

/// How catalogue loading reacts to a malformed line or unreadable file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the failure and keep only the records read before it
    #[default]
    Stop,
    /// Log and skip the bad line, keep reading
    Skip,
    /// Fail the whole load
    Fail,
}

impl LoadPolicy {
    /// Lowercase name as used in configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Skip => "skip",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop" => Ok(Self::Stop),
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "Invalid load policy '{other}' (expected stop, skip or fail)"
            )),
        }
    }
}

/// Parse catalogue text into records of type `T`
///
/// # Arguments
/// * `text` - Catalogue contents
/// * `kind` - Record kind used in log and error messages
/// * `policy` - What to do with a malformed line
///
/// # Errors
/// Returns [`LoadError::Malformed`] for the first bad line under
/// [`LoadPolicy::Fail`]; other policies never fail.
pub fn parse_records<T>(text: &str, kind: &'static str, policy: LoadPolicy) -> Result<Vec<T>, LoadError>
where
    T: FromStr<Err = String>,
{
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<T>() {
            Ok(record) => records.push(record),
            Err(reason) => {
                let err = LoadError::Malformed {
                    kind,
                    line: index + 1,
                    reason,
                };
                match policy {
                    LoadPolicy::Fail => return Err(err),
                    LoadPolicy::Skip => crate::warn!("Skipping {err}"),
                    LoadPolicy::Stop => {
                        crate::error!("{err}; ignoring the rest of the {kind} catalogue");
                        break;
                    }
                }
            }
        }
    }

    crate::debug!("Parsed {} {kind} records", records.len());
    Ok(records)
}

/// Parse module catalogue text (`code, name, credits` per line)
///
/// # Errors
/// See [`parse_records`].
pub fn parse_modules(text: &str, policy: LoadPolicy) -> Result<Vec<Module>, LoadError> {
    parse_records(text, "module", policy)
}

/// Parse supervisor catalogue text (`firstName, lastName` per line)
///
/// # Errors
/// See [`parse_records`].
pub fn parse_supervisors(text: &str, policy: LoadPolicy) -> Result<Vec<Supervisor>, LoadError> {
    parse_records(text, "supervisor", policy)
}

/// Read and parse a catalogue file
///
/// An unreadable file is an error only under [`LoadPolicy::Fail`]; otherwise
/// it is logged and yields no records.
///
/// # Errors
/// Returns [`LoadError::Io`] or [`LoadError::Malformed`] under [`LoadPolicy::Fail`].
pub fn load_records<T, P>(path: P, kind: &'static str, policy: LoadPolicy) -> Result<Vec<T>, LoadError>
where
    T: FromStr<Err = String>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse_records(&text, kind, policy),
        Err(source) => {
            let err = LoadError::Io {
                path: path.to_path_buf(),
                source,
            };
            if policy == LoadPolicy::Fail {
                return Err(err);
            }
            crate::error!("{err}; the {kind} catalogue will be empty");
            Ok(Vec::new())
        }
    }
}

/// Read the module catalogue from a file
///
/// # Errors
/// See [`load_records`].
pub fn load_modules<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<Vec<Module>, LoadError> {
    load_records(path, "module", policy)
}

/// Read the supervisor catalogue from a file
///
/// # Errors
/// See [`load_records`].
pub fn load_supervisors<P: AsRef<Path>>(
    path: P,
    policy: LoadPolicy,
) -> Result<Vec<Supervisor>, LoadError> {
    load_records(path, "supervisor", policy)
}
