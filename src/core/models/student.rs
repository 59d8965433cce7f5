//! Student model
//!
//! A [`Student`] is one of three categories. Undergraduate and postgraduate
//! taught students are *credited*: they carry an [`Enrolment`] and are
//! correctly registered when their module credits add up to the exact total
//! for their category. Postgraduate research students take no modules and are
//! judged on having a named [`Supervisor`] instead.

use super::{Module, StudentName, Supervisor};
use crate::core::error::{RegistryError, Result};
use crate::core::ids::StudentId;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Category tag for a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentType {
    /// Undergraduate (credited)
    Undergraduate,
    /// Postgraduate taught (credited)
    PostgraduateTaught,
    /// Postgraduate research (supervised)
    PostgraduateResearch,
}

impl StudentType {
    /// Lowercase name (e.g., "postgraduate_taught")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::PostgraduateTaught => "postgraduate_taught",
            Self::PostgraduateResearch => "postgraduate_research",
        }
    }

    /// Whether this is a postgraduate category
    #[must_use]
    pub const fn is_postgraduate(self) -> bool {
        !matches!(self, Self::Undergraduate)
    }

    /// Minimum age in whole years for a smartcard to be issued
    #[must_use]
    pub const fn minimum_age(self) -> i32 {
        if self.is_postgraduate() {
            20
        } else {
            17
        }
    }
}

impl fmt::Display for StudentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StudentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "undergraduate" | "ug" => Ok(Self::Undergraduate),
            "postgraduate_taught" | "pgt" => Ok(Self::PostgraduateTaught),
            "postgraduate_research" | "pgr" => Ok(Self::PostgraduateResearch),
            other => Err(format!("Unknown student type: '{other}'")),
        }
    }
}

/// Modules a credited student is enrolled on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrolment {
    modules: HashSet<Module>,
}

impl Enrolment {
    /// Enrol on a module. Returns `false` if already enrolled on an equal module.
    pub fn add(&mut self, module: Module) -> bool {
        self.modules.insert(module)
    }

    /// Enrolled modules
    #[must_use]
    pub const fn modules(&self) -> &HashSet<Module> {
        &self.modules
    }

    /// Sum of the credits of every enrolled module
    #[must_use]
    pub fn registered_credits(&self) -> u32 {
        self.modules.iter().map(Module::credits).sum()
    }
}

/// Category-specific student data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentKind {
    /// Undergraduate with a module enrolment
    Undergraduate(Enrolment),
    /// Postgraduate taught with a module enrolment
    PostgraduateTaught(Enrolment),
    /// Postgraduate research with an allocated supervisor
    PostgraduateResearch {
        /// The student's supervisor
        supervisor: Supervisor,
    },
}

impl StudentKind {
    /// Category tag for this kind
    #[must_use]
    pub const fn student_type(&self) -> StudentType {
        match self {
            Self::Undergraduate(_) => StudentType::Undergraduate,
            Self::PostgraduateTaught(_) => StudentType::PostgraduateTaught,
            Self::PostgraduateResearch { .. } => StudentType::PostgraduateResearch,
        }
    }
}

/// A student, registered or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: StudentName,
    date_of_birth: NaiveDate,
    /// `None` until the registry assigns one; cleared again on termination
    student_id: Option<StudentId>,
    kind: StudentKind,
}

impl Student {
    /// Create an unregistered student of the given kind
    #[must_use]
    pub const fn new(name: StudentName, date_of_birth: NaiveDate, kind: StudentKind) -> Self {
        Self {
            name,
            date_of_birth,
            student_id: None,
            kind,
        }
    }

    /// Create an undergraduate student with no modules
    #[must_use]
    pub fn undergraduate(name: StudentName, date_of_birth: NaiveDate) -> Self {
        Self::new(name, date_of_birth, StudentKind::Undergraduate(Enrolment::default()))
    }

    /// Create a postgraduate taught student with no modules
    #[must_use]
    pub fn postgraduate_taught(name: StudentName, date_of_birth: NaiveDate) -> Self {
        Self::new(name, date_of_birth, StudentKind::PostgraduateTaught(Enrolment::default()))
    }

    /// Create a postgraduate research student
    #[must_use]
    pub const fn postgraduate_research(
        name: StudentName,
        date_of_birth: NaiveDate,
        supervisor: Supervisor,
    ) -> Self {
        Self::new(name, date_of_birth, StudentKind::PostgraduateResearch { supervisor })
    }

    /// Student name
    #[must_use]
    pub const fn name(&self) -> &StudentName {
        &self.name
    }

    /// Date of birth
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Category tag
    #[must_use]
    pub const fn student_type(&self) -> StudentType {
        self.kind.student_type()
    }

    /// Assigned student id, `None` while unregistered
    #[must_use]
    pub const fn student_id(&self) -> Option<&StudentId> {
        self.student_id.as_ref()
    }

    /// Whether the registry has assigned an id
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.student_id.is_some()
    }

    pub(crate) fn set_student_id(&mut self, student_id: Option<StudentId>) {
        self.student_id = student_id;
    }

    /// Module enrolment for credited students
    #[must_use]
    pub const fn enrolment(&self) -> Option<&Enrolment> {
        match &self.kind {
            StudentKind::Undergraduate(enrolment) | StudentKind::PostgraduateTaught(enrolment) => {
                Some(enrolment)
            }
            StudentKind::PostgraduateResearch { .. } => None,
        }
    }

    /// Enrolled modules; always empty for research students
    pub fn modules(&self) -> impl Iterator<Item = &Module> + '_ {
        self.enrolment()
            .into_iter()
            .flat_map(|enrolment| enrolment.modules().iter())
    }

    /// Enrol on a module
    ///
    /// Re-adding an equal module has no effect and returns `Ok(false)`.
    ///
    /// # Errors
    /// Research students cannot take modules: always returns
    /// [`RegistryError::ModulesNotSupported`] for them.
    pub fn add_module(&mut self, module: Module) -> Result<bool> {
        match &mut self.kind {
            StudentKind::Undergraduate(enrolment) | StudentKind::PostgraduateTaught(enrolment) => {
                Ok(enrolment.add(module))
            }
            StudentKind::PostgraduateResearch { .. } => Err(RegistryError::ModulesNotSupported(
                StudentType::PostgraduateResearch,
            )),
        }
    }

    /// Sum of enrolled module credits (0 for research students)
    #[must_use]
    pub fn registered_credits(&self) -> u32 {
        self.enrolment().map_or(0, Enrolment::registered_credits)
    }

    /// Credits a credited student must be enrolled on
    #[must_use]
    pub const fn expected_credits(&self) -> Option<u32> {
        match self.kind {
            StudentKind::Undergraduate(_) => Some(120),
            StudentKind::PostgraduateTaught(_) => Some(180),
            StudentKind::PostgraduateResearch { .. } => None,
        }
    }

    /// Pass mark, as a percentage, for a credited student's modules
    #[must_use]
    pub const fn pass_percentage(&self) -> Option<u32> {
        match self.kind {
            StudentKind::Undergraduate(_) => Some(40),
            StudentKind::PostgraduateTaught(_) => Some(50),
            StudentKind::PostgraduateResearch { .. } => None,
        }
    }

    /// Supervisor of a research student
    #[must_use]
    pub const fn supervisor(&self) -> Option<&Supervisor> {
        match &self.kind {
            StudentKind::PostgraduateResearch { supervisor } => Some(supervisor),
            _ => None,
        }
    }

    /// Whether the student's enrolment satisfies their category's rule
    ///
    /// Credited students need an exact credit match; research students need a
    /// supervisor with a non-empty name.
    #[must_use]
    pub fn is_registered_correctly(&self) -> bool {
        match &self.kind {
            StudentKind::PostgraduateResearch { supervisor } => !supervisor.full_name().is_empty(),
            _ => self.expected_credits() == Some(self.registered_credits()),
        }
    }
}
