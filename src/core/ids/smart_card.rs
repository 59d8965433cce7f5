//! Smartcard issuance

use super::{SmartCardNumber, SmartCardNumberGenerator, StudentId};
use crate::core::error::{RegistryError, Result};
use crate::core::models::{StudentName, StudentType};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use std::hash::{Hash, Hasher};

/// Age in whole years on `on`
///
/// One less than the calendar-year difference while the birthday has not
/// yet come round in `on`'s year.
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let age = on.year() - date_of_birth.year();
    if (date_of_birth.month(), date_of_birth.day()) > (on.month(), on.day()) {
        age - 1
    } else {
        age
    }
}

/// Check that a student of `student_type` born on `date_of_birth` may hold a card on `on`
///
/// # Returns
/// The student's age on `on`
///
/// # Errors
/// Returns [`RegistryError::NotOldEnough`] below the category's minimum age.
pub fn check_eligibility(
    student_type: StudentType,
    date_of_birth: NaiveDate,
    on: NaiveDate,
) -> Result<i32> {
    let age = age_on(date_of_birth, on);
    let minimum = student_type.minimum_age();
    if age < minimum {
        return Err(RegistryError::NotOldEnough {
            student_type,
            age,
            minimum,
        });
    }
    Ok(age)
}

/// Identity card issued to a registered student
///
/// Two cards are equal when their numbers are equal.
#[derive(Debug, Clone)]
pub struct SmartCard {
    student_name: StudentName,
    student_id: StudentId,
    date_of_birth: NaiveDate,
    number: SmartCardNumber,
    issued_at: DateTime<Local>,
}

impl SmartCard {
    /// Issue a card at `issued_at`
    ///
    /// The card number is drawn from `numbers` keyed by the student's
    /// initials and the issue year. No number is consumed when the student
    /// is not eligible.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotOldEnough`] if the student is too young
    /// for their category on the issue date.
    pub fn issue(
        student_name: &StudentName,
        student_id: &StudentId,
        student_type: StudentType,
        date_of_birth: NaiveDate,
        numbers: &mut SmartCardNumberGenerator,
        issued_at: DateTime<Local>,
    ) -> Result<Self> {
        check_eligibility(student_type, date_of_birth, issued_at.date_naive())?;
        let number = numbers.next(student_name, &issued_at.year().to_string())?;

        Ok(Self {
            student_name: student_name.clone(),
            student_id: student_id.clone(),
            date_of_birth,
            number,
            issued_at,
        })
    }

    /// Name printed on the card
    #[must_use]
    pub const fn student_name(&self) -> &StudentName {
        &self.student_name
    }

    /// Id of the card holder
    #[must_use]
    pub const fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    /// Holder's date of birth
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Card number
    #[must_use]
    pub const fn number(&self) -> &SmartCardNumber {
        &self.number
    }

    /// Instant the card was issued
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Local> {
        self.issued_at
    }
}

impl PartialEq for SmartCard {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for SmartCard {}

impl Hash for SmartCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}
