//! The student registry
//!
//! [`DataSystem`] owns the module and supervisor catalogues, the registered
//! students, the smartcard issued to each of them, and the two generators
//! that mint student ids and card numbers. A student moves from unregistered
//! (no id) to registered (id assigned, card on file) and back to
//! unregistered when terminated.

use crate::core::catalog::{self, LoadPolicy};
use crate::core::config::Config;
use crate::core::error::{LoadError, RegistryError, Result};
use crate::core::ids::{
    check_eligibility, SmartCard, SmartCardNumberGenerator, StudentId, StudentIdGenerator,
};
use crate::core::models::{Module, Student, StudentType, Supervisor};
use chrono::{DateTime, Local};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// In-memory registry of students and their smartcards
#[derive(Debug, Default)]
pub struct DataSystem {
    modules: BTreeSet<Module>,
    supervisors: BTreeSet<Supervisor>,
    students: Vec<Student>,
    smart_cards: HashMap<StudentId, SmartCard>,
    student_ids: StudentIdGenerator,
    card_numbers: SmartCardNumberGenerator,
}

impl DataSystem {
    /// Create a registry over the given catalogues with no students
    pub fn new<M, S>(modules: M, supervisors: S) -> Self
    where
        M: IntoIterator<Item = Module>,
        S: IntoIterator<Item = Supervisor>,
    {
        Self {
            modules: modules.into_iter().collect(),
            supervisors: supervisors.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create a registry from catalogue text
    ///
    /// # Errors
    /// Returns a [`LoadError`] for a malformed line under [`LoadPolicy::Fail`].
    pub fn from_sources(modules: &str, supervisors: &str, policy: LoadPolicy) -> std::result::Result<Self, LoadError> {
        let modules = catalog::parse_modules(modules, policy)?;
        let supervisors = catalog::parse_supervisors(supervisors, policy)?;
        Ok(Self::new(modules, supervisors))
    }

    /// Create a registry from catalogue files
    ///
    /// # Errors
    /// Returns a [`LoadError`] for an unreadable file or malformed line under
    /// [`LoadPolicy::Fail`].
    pub fn from_files<P, Q>(modules: P, supervisors: Q, policy: LoadPolicy) -> std::result::Result<Self, LoadError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let modules = catalog::load_modules(modules, policy)?;
        let supervisors = catalog::load_supervisors(supervisors, policy)?;
        crate::info!(
            "Loaded {} modules and {} supervisors",
            modules.len(),
            supervisors.len()
        );
        Ok(Self::new(modules, supervisors))
    }

    /// Create a registry from the catalogue files and load policy in `config`
    ///
    /// # Errors
    /// See [`DataSystem::from_files`].
    pub fn from_config(config: &Config) -> std::result::Result<Self, LoadError> {
        Self::from_files(
            &config.data.modules_file,
            &config.data.supervisors_file,
            config.load_policy(),
        )
    }

    /// Count the registered students of one category
    #[must_use]
    pub fn no_of_students(&self, student_type: StudentType) -> usize {
        self.students
            .iter()
            .filter(|student| student.student_type() == student_type)
            .count()
    }

    /// Register a student, issuing their id and smartcard now
    ///
    /// # Errors
    /// See [`DataSystem::register_student_at`].
    pub fn register_student(&mut self, student: Student) -> Result<StudentId> {
        self.register_student_at(student, Local::now())
    }

    /// Register a student with a smartcard issued at `issued_at`
    ///
    /// Age eligibility is checked before any id is minted, so a refused
    /// student consumes neither a student id nor a card serial.
    ///
    /// # Returns
    /// The newly assigned student id
    ///
    /// # Errors
    /// - [`RegistryError::AlreadyRegistered`] if the student already has an id
    /// - [`RegistryError::NotOldEnough`] if the student is too young for their category
    /// - [`RegistryError::StudentIdSpaceExhausted`] once no more ids can be minted
    pub fn register_student_at(
        &mut self,
        mut student: Student,
        issued_at: DateTime<Local>,
    ) -> Result<StudentId> {
        if let Some(existing) = student.student_id() {
            return Err(RegistryError::AlreadyRegistered(existing.clone()));
        }
        check_eligibility(
            student.student_type(),
            student.date_of_birth(),
            issued_at.date_naive(),
        )?;

        let student_id = self.student_ids.create_student_id()?;
        let card = SmartCard::issue(
            student.name(),
            &student_id,
            student.student_type(),
            student.date_of_birth(),
            &mut self.card_numbers,
            issued_at,
        )?;

        crate::info!(
            "Registered {} {} as {student_id} (card {})",
            student.student_type(),
            student.name(),
            card.number()
        );
        student.set_student_id(Some(student_id.clone()));
        self.smart_cards.insert(student_id.clone(), card);
        self.students.push(student);

        Ok(student_id)
    }

    /// Terminate a registration
    ///
    /// Removes the student and their smartcard, clears the student's id and
    /// hands the record back so it can be registered again.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotRegistered`] if no student holds `student_id`.
    pub fn terminate_student(&mut self, student_id: &StudentId) -> Result<Student> {
        let index = self
            .students
            .iter()
            .position(|student| student.student_id() == Some(student_id))
            .ok_or_else(|| RegistryError::NotRegistered(student_id.clone()))?;

        let mut student = self.students.remove(index);
        self.smart_cards.remove(student_id);
        student.set_student_id(None);

        crate::info!("Terminated {student_id} ({})", student.name());
        Ok(student)
    }

    /// Replace a registered student's record with `new_data`
    ///
    /// # Errors
    /// See [`DataSystem::amend_student_data_at`].
    pub fn amend_student_data(&mut self, student_id: &StudentId, new_data: Student) -> Result<StudentId> {
        self.amend_student_data_at(student_id, new_data, Local::now())
    }

    /// Replace a registered student's record, issuing the new card at `issued_at`
    ///
    /// The old record is terminated and `new_data` registered under a fresh
    /// id. Every check runs before the old record is touched, so a failed
    /// amendment leaves the registry unchanged.
    ///
    /// # Errors
    /// - [`RegistryError::NotRegistered`] if no student holds `student_id`
    /// - [`RegistryError::AlreadyRegistered`] if `new_data` already has an id
    /// - [`RegistryError::NotOldEnough`] if `new_data` is too young for its category
    pub fn amend_student_data_at(
        &mut self,
        student_id: &StudentId,
        new_data: Student,
        issued_at: DateTime<Local>,
    ) -> Result<StudentId> {
        if !self.smart_cards.contains_key(student_id) {
            return Err(RegistryError::NotRegistered(student_id.clone()));
        }
        if let Some(existing) = new_data.student_id() {
            return Err(RegistryError::AlreadyRegistered(existing.clone()));
        }
        check_eligibility(
            new_data.student_type(),
            new_data.date_of_birth(),
            issued_at.date_naive(),
        )?;

        self.terminate_student(student_id)?;
        let new_id = self.register_student_at(new_data, issued_at)?;
        crate::info!("Amended {student_id} -> {new_id}");
        Ok(new_id)
    }

    /// Snapshot of the module catalogue, ordered by code
    #[must_use]
    pub fn modules(&self) -> Vec<Module> {
        self.modules.iter().cloned().collect()
    }

    /// Look up a module by code (case-insensitive)
    #[must_use]
    pub fn module(&self, code: &str) -> Option<&Module> {
        let code = code.trim();
        self.modules
            .iter()
            .find(|module| module.code().eq_ignore_ascii_case(code))
    }

    /// Snapshot of the supervisor catalogue
    #[must_use]
    pub fn supervisors(&self) -> Vec<Supervisor> {
        self.supervisors.iter().cloned().collect()
    }

    /// Look up a supervisor by full name (case-insensitive)
    #[must_use]
    pub fn supervisor(&self, full_name: &str) -> Option<&Supervisor> {
        let full_name = full_name.trim();
        self.supervisors
            .iter()
            .find(|supervisor| supervisor.full_name().eq_ignore_ascii_case(full_name))
    }

    /// Snapshot of the registered students
    #[must_use]
    pub fn students(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// The registered student holding `student_id`
    #[must_use]
    pub fn student(&self, student_id: &StudentId) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.student_id() == Some(student_id))
    }

    /// Snapshot of the issued smartcards, keyed by student id
    #[must_use]
    pub fn smart_cards(&self) -> HashMap<StudentId, SmartCard> {
        self.smart_cards.clone()
    }

    /// The smartcard issued to `student_id`
    #[must_use]
    pub fn smart_card(&self, student_id: &StudentId) -> Option<&SmartCard> {
        self.smart_cards.get(student_id)
    }
}
