//! Smartcard numbers and their per-(initials, year) serial counters

use crate::core::error::{RegistryError, Result};
use crate::core::models::StudentName;
use std::collections::HashMap;
use std::fmt;

const SEPARATOR: &str = "-";

/// A smartcard number such as `WA-2024-0`
///
/// Serials are scoped to the initials and issue year, so two numbers only
/// differ in their serial when they share the same prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SmartCardNumber {
    first_initial: String,
    last_initial: String,
    year: String,
    serial_number: u32,
}

impl SmartCardNumber {
    /// First initial
    #[must_use]
    pub fn first_initial(&self) -> &str {
        &self.first_initial
    }

    /// Last initial
    #[must_use]
    pub fn last_initial(&self) -> &str {
        &self.last_initial
    }

    /// Issue year
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Serial number within the (initials, year) scope
    #[must_use]
    pub const fn serial_number(&self) -> u32 {
        self.serial_number
    }

    /// Full number (e.g., "WA-2024-0")
    #[must_use]
    pub fn full_number(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SmartCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.first_initial, self.last_initial, self.year, self.serial_number
        )
    }
}

/// Hands out the next serial for each `initials-year` key
#[derive(Debug, Default)]
pub struct SmartCardNumberGenerator {
    /// Last serial issued per key; a missing key means none issued yet
    last_serials: HashMap<String, u32>,
}

impl SmartCardNumberGenerator {
    /// Create a generator with no serials issued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next number for `name` in `year`
    ///
    /// Initials are taken as supplied, without case normalization.
    ///
    /// # Errors
    /// Returns [`RegistryError::MissingField`] if `year` is blank.
    pub fn next(&mut self, name: &StudentName, year: &str) -> Result<SmartCardNumber> {
        let year = year.trim();
        if year.is_empty() {
            return Err(RegistryError::MissingField("issue year"));
        }
        let first_initial = initial(name.first_name()).ok_or(RegistryError::MissingField("first name"))?;
        let last_initial = initial(name.last_name()).ok_or(RegistryError::MissingField("last name"))?;

        let key = format!("{first_initial}{last_initial}{SEPARATOR}{year}");
        let serial_number = self.last_serials.get(&key).map_or(0, |last| last + 1);
        crate::debug!("Issuing smartcard serial {serial_number} for {key}");
        self.last_serials.insert(key, serial_number);

        Ok(SmartCardNumber {
            first_initial,
            last_initial,
            year: year.to_string(),
            serial_number,
        })
    }
}

fn initial(name: &str) -> Option<String> {
    name.chars().next().map(String::from)
}
