//! Module model

use crate::core::error::{RegistryError, Result};
use std::fmt;
use std::str::FromStr;

/// A taught module that credited students enrol on
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Module {
    /// Module code (e.g., "CSC1021")
    code: String,

    /// Module name (e.g., "Programming I")
    name: String,

    /// Credit value
    credits: u32,
}

impl Module {
    /// Create a new module
    ///
    /// # Arguments
    /// * `code` - Module code
    /// * `name` - Module name
    /// * `credits` - Credit value; must not be negative
    ///
    /// # Errors
    /// Returns [`RegistryError::MissingField`] for a blank code or name and
    /// [`RegistryError::NegativeCredits`] for a negative credit value.
    pub fn new(code: &str, name: &str, credits: i32) -> Result<Self> {
        if code.trim().is_empty() {
            return Err(RegistryError::MissingField("module code"));
        }
        if name.trim().is_empty() {
            return Err(RegistryError::MissingField("module name"));
        }
        let credits = u32::try_from(credits).map_err(|_| RegistryError::NegativeCredits {
            code: code.to_string(),
            credits,
        })?;

        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            credits,
        })
    }

    /// Module code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Module name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit value
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }
}

/// Parses a catalogue line of the form `code, name, credits`.
impl FromStr for Module {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "expected 3 fields (code, name, credits), found {}",
                parts.len()
            ));
        }

        let credits = parts[2]
            .parse::<i32>()
            .map_err(|e| format!("invalid credits '{}': {e}", parts[2]))?;

        Self::new(parts[0], parts[1], credits).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} credits)", self.code, self.name, self.credits)
    }
}
