//! Integration tests for student registration and smartcard issuance

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use student_data::catalog::LoadPolicy;
use student_data::ids::{SmartCard, SmartCardNumberGenerator, StudentId, StudentIdGenerator};
use student_data::models::{Module, Student, StudentName, StudentType, Supervisor};
use student_data::{DataSystem, RegistryError};
use std::collections::HashSet;

const MODULES: &str = "\
CSC1021, Programming I, 20
CSC1022, Programming II, 20
CSC1023, Computer Architecture, 20
CSC1024, Databases, 20
CSC1025, Mathematics for Computing, 20
CSC1026, Communication and Professional Development, 20
CSC1027, Extra Credit, 1
";

const SUPERVISORS: &str = "\
Neil, Speirs
Jason, Steggles
";

fn issued_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 9, 1, 10, 30, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn name(first: &str, last: &str) -> StudentName {
    StudentName::new(first, last).unwrap()
}

fn data_system() -> DataSystem {
    DataSystem::from_sources(MODULES, SUPERVISORS, LoadPolicy::Fail).unwrap()
}

fn enrolled_undergraduate(ds: &DataSystem, codes: &[&str]) -> Student {
    let mut student = Student::undergraduate(name("Wilfrid", "Askins"), date(1999, 4, 30));
    for code in codes {
        let module = ds.module(code).cloned().unwrap();
        assert!(student.add_module(module).unwrap());
    }
    student
}

#[test]
fn student_ids_are_pairwise_distinct() {
    let mut generator = StudentIdGenerator::new();
    let ids: HashSet<String> = (0..3_000)
        .map(|_| generator.create_student_id().unwrap().full_id())
        .collect();

    assert_eq!(ids.len(), 3_000);
    assert!(ids.contains("a0001"));
    assert!(ids.contains("a9999"));
    assert_eq!(generator.issued(), 3_000);
}

#[test]
fn smart_card_serials_are_scoped_by_initials_and_year() {
    let mut numbers = SmartCardNumberGenerator::new();
    let wilfrid = name("Wilfrid", "Askins");

    assert_eq!(numbers.next(&wilfrid, "2024").unwrap().serial_number(), 0);
    assert_eq!(numbers.next(&wilfrid, "2024").unwrap().serial_number(), 1);
    assert_eq!(numbers.next(&name("Jane", "Askins"), "2024").unwrap().serial_number(), 0);
    assert_eq!(numbers.next(&wilfrid, "2025").unwrap().serial_number(), 0);
    assert_eq!(
        numbers.next(&name("Walter", "Arnold"), "2024").unwrap().full_number(),
        "WA-2024-2"
    );
}

#[test]
fn eligibility_boundaries() {
    let id: StudentId = "a0001".parse().unwrap();
    let mut numbers = SmartCardNumberGenerator::new();
    let student_name = name("Wilfrid", "Askins");
    let issue = |student_type, dob, numbers: &mut SmartCardNumberGenerator| {
        SmartCard::issue(&student_name, &id, student_type, dob, numbers, issued_at())
    };

    assert!(issue(StudentType::Undergraduate, date(2007, 9, 1), &mut numbers).is_ok());
    assert!(matches!(
        issue(StudentType::Undergraduate, date(2007, 9, 2), &mut numbers),
        Err(RegistryError::NotOldEnough { age: 16, minimum: 17, .. })
    ));

    for student_type in [StudentType::PostgraduateTaught, StudentType::PostgraduateResearch] {
        assert!(issue(student_type, date(2004, 9, 1), &mut numbers).is_ok());
        assert!(matches!(
            issue(student_type, date(2004, 9, 2), &mut numbers),
            Err(RegistryError::NotOldEnough { age: 19, minimum: 20, .. })
        ));
    }
}

#[test]
fn undergraduate_needs_exactly_120_credits() {
    let ds = data_system();
    let exact = enrolled_undergraduate(
        &ds,
        &["CSC1021", "CSC1022", "CSC1023", "CSC1024", "CSC1025", "CSC1026"],
    );
    let short = enrolled_undergraduate(
        &ds,
        &["CSC1021", "CSC1022", "CSC1023", "CSC1024", "CSC1025", "CSC1027"],
    );
    let over = enrolled_undergraduate(
        &ds,
        &["CSC1021", "CSC1022", "CSC1023", "CSC1024", "CSC1025", "CSC1026", "CSC1027"],
    );

    assert!(exact.is_registered_correctly());
    assert_eq!(short.registered_credits(), 101);
    assert!(!short.is_registered_correctly());
    assert_eq!(over.registered_credits(), 121);
    assert!(!over.is_registered_correctly());
}

#[test]
fn research_student_rejects_every_module() {
    let ds = data_system();
    let supervisor = ds.supervisor("neil speirs").cloned().unwrap();
    let mut student = Student::postgraduate_research(name("Ada", "Byron"), date(1990, 1, 1), supervisor);

    for module in ds.modules() {
        assert!(matches!(
            student.add_module(module),
            Err(RegistryError::ModulesNotSupported(StudentType::PostgraduateResearch))
        ));
    }
    assert_eq!(student.modules().count(), 0);
    assert!(student.is_registered_correctly());
}

#[test]
fn register_then_terminate_round_trip() {
    let mut ds = data_system();
    let student = enrolled_undergraduate(&ds, &["CSC1021", "CSC1022"]);

    let id = ds.register_student_at(student, issued_at()).unwrap();
    assert!(ds.students().iter().any(|s| s.student_id() == Some(&id)));
    assert!(ds.smart_cards().contains_key(&id));
    assert_eq!(ds.no_of_students(StudentType::Undergraduate), 1);

    let card = ds.smart_card(&id).unwrap();
    assert_eq!(card.student_id(), &id);
    assert_eq!(card.number().full_number(), "WA-2024-0");
    assert_eq!(card.issued_at(), issued_at());

    let student = ds.terminate_student(&id).unwrap();
    assert!(student.student_id().is_none());
    assert!(ds.students().is_empty());
    assert!(!ds.smart_cards().contains_key(&id));
    assert_eq!(ds.no_of_students(StudentType::Undergraduate), 0);

    assert_eq!(
        ds.terminate_student(&id).unwrap_err(),
        RegistryError::NotRegistered(id)
    );
}

#[test]
fn registered_student_cannot_register_again() {
    let mut ds = data_system();
    let id = ds
        .register_student_at(enrolled_undergraduate(&ds, &[]), issued_at())
        .unwrap();

    let copy = ds.student(&id).cloned().unwrap();
    let err = ds.register_student_at(copy, issued_at()).unwrap_err();

    assert_eq!(err, RegistryError::AlreadyRegistered(id.clone()));
    assert_eq!(ds.students().len(), 1);
    assert_eq!(ds.smart_cards().len(), 1);
    assert_eq!(ds.smart_card(&id).unwrap().number().serial_number(), 0);
}

#[test]
fn blank_required_values_are_rejected() {
    assert_eq!(
        StudentName::new(" ", "Askins"),
        Err(RegistryError::MissingField("first name"))
    );
    assert_eq!(
        StudentName::new("Wilfrid", ""),
        Err(RegistryError::MissingField("last name"))
    );
    assert_eq!(
        Module::new("", "Programming I", 20),
        Err(RegistryError::MissingField("module code"))
    );
    assert!(matches!(
        Module::new("CSC1021", "Programming I", -1),
        Err(RegistryError::NegativeCredits { credits: -1, .. })
    ));
    assert_eq!(
        "".parse::<StudentId>(),
        Err(RegistryError::MissingField("student id"))
    );

    let mut ds = data_system();
    let id = ds
        .register_student_at(enrolled_undergraduate(&ds, &[]), issued_at())
        .unwrap();
    let unknown: StudentId = "z9999".parse().unwrap();
    let replacement = Student::undergraduate(name("Jane", "Doe"), date(2000, 1, 1));

    assert_eq!(
        ds.amend_student_data_at(&unknown, replacement, issued_at()),
        Err(RegistryError::NotRegistered(unknown))
    );
    assert_eq!(ds.students().len(), 1);
    assert!(ds.student(&id).is_some());
}

#[test]
fn ineligible_registration_consumes_no_id() {
    let mut ds = data_system();
    let young = Student::postgraduate_taught(name("Tim", "Young"), date(2006, 1, 1));

    assert!(matches!(
        ds.register_student_at(young, issued_at()),
        Err(RegistryError::NotOldEnough { .. })
    ));
    assert!(ds.students().is_empty());
    assert!(ds.smart_cards().is_empty());

    let id = ds
        .register_student_at(enrolled_undergraduate(&ds, &[]), issued_at())
        .unwrap();
    assert_eq!(id.full_id(), "a0001");
}

#[test]
fn amendment_replaces_record_under_a_new_id() {
    let mut ds = data_system();
    let old_id = ds
        .register_student_at(enrolled_undergraduate(&ds, &["CSC1021"]), issued_at())
        .unwrap();

    let supervisor = Supervisor::new("Jason", "Steggles");
    let research = Student::postgraduate_research(name("Wilfrid", "Askins"), date(1999, 4, 30), supervisor);
    let new_id = ds.amend_student_data_at(&old_id, research, issued_at()).unwrap();

    assert_ne!(old_id, new_id);
    assert!(ds.student(&old_id).is_none());
    assert!(ds.smart_card(&old_id).is_none());
    assert_eq!(ds.no_of_students(StudentType::Undergraduate), 0);
    assert_eq!(ds.no_of_students(StudentType::PostgraduateResearch), 1);
    assert_eq!(
        ds.smart_card(&new_id).unwrap().number().full_number(),
        "WA-2024-1"
    );
}

#[test]
fn amendment_rejects_an_already_registered_replacement() {
    let mut ds = data_system();
    let a = ds
        .register_student_at(enrolled_undergraduate(&ds, &["CSC1021"]), issued_at())
        .unwrap();
    let b = ds
        .register_student_at(
            Student::postgraduate_taught(name("Jane", "Doe"), date(1995, 2, 3)),
            issued_at(),
        )
        .unwrap();

    let replacement = ds.student(&b).cloned().unwrap();
    assert_eq!(
        ds.amend_student_data_at(&a, replacement, issued_at()),
        Err(RegistryError::AlreadyRegistered(b.clone()))
    );

    assert!(ds.student(&a).is_some());
    assert!(ds.student(&b).is_some());
    assert!(ds.smart_card(&a).is_some());
    assert!(ds.smart_card(&b).is_some());
    assert_eq!(ds.students().len(), 2);
}
