//! Supervisor model

use std::fmt;
use std::str::FromStr;

/// Research supervisor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Supervisor {
    first_name: String,
    last_name: String,
}

impl Supervisor {
    /// Create a new supervisor
    #[must_use]
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// First name
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Full name, empty when both name parts are blank
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parses a catalogue line of the form `firstName, lastName`.
impl FromStr for Supervisor {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(format!(
                "expected 2 fields (firstName, lastName), found {}",
                parts.len()
            ));
        }
        Ok(Self::new(parts[0], parts[1]))
    }
}

impl fmt::Display for Supervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let supervisor = Supervisor::new("Neil", "Speirs");
        assert_eq!(supervisor.full_name(), "Neil Speirs");
        assert_eq!(supervisor.to_string(), "Neil Speirs");
    }

    #[test]
    fn test_blank_full_name() {
        assert_eq!(Supervisor::new(" ", "").full_name(), "");
        assert_eq!(Supervisor::new("", "Speirs").full_name(), "Speirs");
    }

    #[test]
    fn test_parse_line() {
        let supervisor: Supervisor = "Neil , Speirs".parse().unwrap();
        assert_eq!(supervisor, Supervisor::new("Neil", "Speirs"));
        assert!("Neil".parse::<Supervisor>().is_err());
        assert!("Neil, Speirs, Extra".parse::<Supervisor>().is_err());
    }
}
