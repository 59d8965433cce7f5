//! Student name model

use crate::core::error::{RegistryError, Result};
use std::fmt;

/// A student's name as printed on their smartcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName {
    first_name: String,
    middle_names: Option<String>,
    last_name: String,
}

impl StudentName {
    /// Create a name without middle names
    ///
    /// # Errors
    /// Returns [`RegistryError::MissingField`] if either name part is blank.
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        Self::with_middle_names(first_name, "", last_name)
    }

    /// Create a name with middle names; a blank `middle_names` means none
    ///
    /// # Errors
    /// Returns [`RegistryError::MissingField`] if the first or last name is blank.
    pub fn with_middle_names(first_name: &str, middle_names: &str, last_name: &str) -> Result<Self> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() {
            return Err(RegistryError::MissingField("first name"));
        }
        if last_name.is_empty() {
            return Err(RegistryError::MissingField("last name"));
        }

        let middle_names = Some(middle_names.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(Self {
            first_name: first_name.to_string(),
            middle_names,
            last_name: last_name.to_string(),
        })
    }

    /// First name
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Middle names, if any
    #[must_use]
    pub fn middle_names(&self) -> Option<&str> {
        self.middle_names.as_deref()
    }

    /// Last name
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Full name with single spaces between the parts
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.middle_names {
            Some(middle) => format!("{} {middle} {}", self.first_name, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
