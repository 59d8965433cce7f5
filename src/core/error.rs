//! Error types for registry operations and catalogue loading

use std::path::PathBuf;

use thiserror::Error;

use crate::core::ids::StudentId;
use crate::core::models::StudentType;

/// Errors raised by the student model, identifier issuance and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required value was empty or absent.
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    /// A module was given a negative credit count.
    #[error("module '{code}' can't have a negative number of credits ({credits})")]
    NegativeCredits {
        /// Module code
        code: String,
        /// The rejected credit value
        credits: i32,
    },

    /// The student is too young for the requested category.
    #[error("a student aged {age} is not old enough to be a {student_type} student (minimum {minimum})")]
    NotOldEnough {
        /// Category that was requested
        student_type: StudentType,
        /// Age in whole years on the issue date
        age: i32,
        /// Minimum age for the category
        minimum: i32,
    },

    /// The student already carries a student id.
    #[error("student is already registered as {0}")]
    AlreadyRegistered(StudentId),

    /// No registered student holds the given id.
    #[error("no student is registered as {0}")]
    NotRegistered(StudentId),

    /// Research students cannot be enrolled on modules.
    #[error("{0} students cannot take modules")]
    ModulesNotSupported(StudentType),

    /// The generator produced an id it had already handed out.
    #[error("student id {0} has already been created")]
    DuplicateStudentId(StudentId),

    /// Every letter of the alphabet has been used up.
    #[error("student id space exhausted after {0} ids")]
    StudentIdSpaceExhausted(u32),

    /// A student id string could not be parsed.
    #[error("invalid student id: '{0}'")]
    InvalidStudentId(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while loading the module or supervisor catalogue.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A catalogue file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path of the catalogue file
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A catalogue line did not describe a valid record.
    #[error("malformed {kind} record on line {line}: {reason}")]
    Malformed {
        /// Record kind (`module` or `supervisor`)
        kind: &'static str,
        /// 1-based line number
        line: usize,
        /// Why the line was rejected
        reason: String,
    },
}
