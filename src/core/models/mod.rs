//! Data models for `student-data`

pub mod module;
pub mod name;
pub mod student;
pub mod supervisor;

pub use module::Module;
pub use name::StudentName;
pub use student::{Enrolment, Student, StudentKind, StudentType};
pub use supervisor::Supervisor;
