//! Identifier generation and smartcard issuance

pub mod smart_card;
pub mod smart_card_number;
pub mod student_id;

pub use smart_card::{age_on, check_eligibility, SmartCard};
pub use smart_card_number::{SmartCardNumber, SmartCardNumberGenerator};
pub use student_id::{StudentId, StudentIdGenerator};
