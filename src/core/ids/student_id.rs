//! Student identifiers and their generator

use crate::core::error::{RegistryError, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Counter values per letter; the number part is `counter % ROLLOVER_VALUE`.
const ROLLOVER_VALUE: u32 = 10_000;

/// A student id such as `a0001`: one lowercase letter and a 4-digit number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId {
    letter: char,
    number: u16,
}

impl StudentId {
    /// Derive the id for a counter value, `None` once the alphabet is used up
    fn from_counter(counter: u32) -> Option<Self> {
        let index = usize::try_from(counter / ROLLOVER_VALUE).ok()?;
        let letter = char::from(*ALPHABET.get(index)?);
        let number = u16::try_from(counter % ROLLOVER_VALUE).ok()?;
        Some(Self { letter, number })
    }

    /// Letter part
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Zero-padded number part (e.g., "0001")
    #[must_use]
    pub fn number(&self) -> String {
        format!("{:04}", self.number)
    }

    /// Letter and number concatenated (e.g., "a0001")
    #[must_use]
    pub fn full_id(&self) -> String {
        format!("{}{:04}", self.letter, self.number)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.letter, self.number)
    }
}

impl FromStr for StudentId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RegistryError::MissingField("student id"));
        }

        let invalid = || RegistryError::InvalidStudentId(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().filter(char::is_ascii_lowercase).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self { letter, number })
    }
}

/// Issues unique [`StudentId`]s from a monotonic counter
///
/// The counter is never rewound, so terminated students do not free their
/// ids for reuse.
#[derive(Debug, Default)]
pub struct StudentIdGenerator {
    /// Last counter value consumed; the first id issued is counter 1
    current: u32,
    created: HashSet<StudentId>,
}

impl StudentIdGenerator {
    /// Create a generator whose first id will be `a0001`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the next student id
    ///
    /// Consumes a counter slot even when it fails.
    ///
    /// # Errors
    /// Returns [`RegistryError::StudentIdSpaceExhausted`] once every letter
    /// has been used, and [`RegistryError::DuplicateStudentId`] if the id was
    /// already created by this generator.
    pub fn create_student_id(&mut self) -> Result<StudentId> {
        let counter = self
            .current
            .checked_add(1)
            .ok_or(RegistryError::StudentIdSpaceExhausted(self.current))?;
        self.current = counter;

        let id = StudentId::from_counter(counter)
            .ok_or(RegistryError::StudentIdSpaceExhausted(counter - 1))?;
        if !self.created.insert(id.clone()) {
            return Err(RegistryError::DuplicateStudentId(id));
        }

        crate::debug!("Created student id {id} (counter {counter})");
        Ok(id)
    }

    /// Number of ids created so far
    #[must_use]
    pub fn issued(&self) -> usize {
        self.created.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_a0001() {
        let mut generator = StudentIdGenerator::new();
        let id = generator.create_student_id().unwrap();
        assert_eq!(id.full_id(), "a0001");
        assert_eq!(id.letter(), 'a');
        assert_eq!(id.number(), "0001");
        assert_eq!(id.to_string(), "a0001");
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let mut generator = StudentIdGenerator::new();
        let ids: HashSet<String> = (0..12_000)
            .map(|_| generator.create_student_id().unwrap().full_id())
            .collect();
        assert_eq!(ids.len(), 12_000);
        assert_eq!(generator.issued(), 12_000);
    }

    #[test]
    fn test_letter_rolls_over_every_ten_thousand() {
        assert_eq!(StudentId::from_counter(9_999).unwrap().full_id(), "a9999");
        assert_eq!(StudentId::from_counter(10_000).unwrap().full_id(), "b0000");
        assert_eq!(StudentId::from_counter(259_999).unwrap().full_id(), "z9999");
        assert!(StudentId::from_counter(260_000).is_none());
    }

    #[test]
    fn test_exhausted_alphabet() {
        let mut generator = StudentIdGenerator {
            current: 259_999,
            created: HashSet::new(),
        };
        assert_eq!(
            generator.create_student_id(),
            Err(RegistryError::StudentIdSpaceExhausted(259_999))
        );
    }

    #[test]
    fn test_collision_is_detected() {
        let mut generator = StudentIdGenerator::new();
        let first = generator.create_student_id().unwrap();
        generator.current = 0;
        assert_eq!(
            generator.create_student_id(),
            Err(RegistryError::DuplicateStudentId(first))
        );
    }

    #[test]
    fn test_parse_student_id() {
        let id: StudentId = "b0042".parse().unwrap();
        assert_eq!(id.letter(), 'b');
        assert_eq!(id.number(), "0042");

        assert_eq!("".parse::<StudentId>(), Err(RegistryError::MissingField("student id")));
        assert!("B0042".parse::<StudentId>().is_err());
        assert!("b042".parse::<StudentId>().is_err());
        assert!("b00x2".parse::<StudentId>().is_err());
    }
}
