//! Register command handler

use crate::args::RegisterArgs;
use chrono::NaiveDate;
use student_data::config::Config;
use student_data::models::{Student, StudentName, StudentType};
use student_data::{error, verbose, DataSystem};

use super::catalog::load_registry;

/// Register one student against a freshly loaded registry and print the result
pub fn run(args: &RegisterArgs, config: &Config) {
    let mut ds = load_registry(config);

    let outcome = build_student(args, &ds).and_then(|student| {
        ds.register_student(student)
            .map_err(|e| format!("✗ Registration refused: {e}"))
    });

    match outcome {
        Ok(student_id) => print_registration(&ds, &student_id),
        Err(message) => {
            error!("{message}");
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

/// Build an unregistered student from the CLI arguments
fn build_student(args: &RegisterArgs, ds: &DataSystem) -> Result<Student, String> {
    let name = StudentName::with_middle_names(&args.first, &args.middle, &args.last)
        .map_err(|e| format!("✗ Invalid name: {e}"))?;
    let dob = NaiveDate::parse_from_str(&args.dob, "%Y-%m-%d")
        .map_err(|e| format!("✗ Invalid date of birth '{}': {e}", args.dob))?;

    let mut student = match StudentType::from(args.kind) {
        StudentType::Undergraduate => Student::undergraduate(name, dob),
        StudentType::PostgraduateTaught => Student::postgraduate_taught(name, dob),
        StudentType::PostgraduateResearch => {
            let wanted = args
                .supervisor
                .as_deref()
                .ok_or("✗ Research students need --supervisor")?;
            let supervisor = ds
                .supervisor(wanted)
                .ok_or_else(|| format!("✗ Unknown supervisor: '{wanted}'"))?;
            Student::postgraduate_research(name, dob, supervisor.clone())
        }
    };

    for code in &args.modules {
        let module = ds
            .module(code)
            .ok_or_else(|| format!("✗ Unknown module: '{code}'"))?;
        student
            .add_module(module.clone())
            .map_err(|e| format!("✗ Cannot enrol on {code}: {e}"))?;
        verbose!("  enrolled on {module}");
    }

    Ok(student)
}

fn print_registration(ds: &DataSystem, student_id: &student_data::ids::StudentId) {
    let Some(student) = ds.student(student_id) else {
        return;
    };
    println!("✓ Registered {} as {student_id}", student.name());

    if let Some(card) = ds.smart_card(student_id) {
        println!("  Smartcard:     {}", card.number());
        println!("  Date of birth: {}", card.date_of_birth());
        println!("  Issued:        {}", card.issued_at().format("%Y-%m-%d %H:%M"));
    }

    if let Some(expected) = student.expected_credits() {
        println!(
            "  Credits:       {}/{expected}",
            student.registered_credits()
        );
    }
    if let Some(supervisor) = student.supervisor() {
        println!("  Supervisor:    {supervisor}");
    }

    if student.is_registered_correctly() {
        println!("✓ Enrolment is complete");
    } else {
        println!("✗ Enrolment is incomplete");
    }
}
