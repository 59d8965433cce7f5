//! Integration tests for loading the module and supervisor catalogues from disk

use std::fs;
use std::path::PathBuf;
use student_data::catalog::{load_modules, load_supervisors, LoadPolicy};
use student_data::config::Config;
use student_data::{DataSystem, LoadError};
use tempfile::TempDir;

const MODULES: &str = "CSC1021, Programming I, 20\n\
                       CSC1022, Programming II\n\
                       CSC1023, Computer Architecture, 20\n";

const SUPERVISORS: &str = "Neil, Speirs\n\nJason, Steggles\nMarie Devlin\n";

fn write_catalogues(dir: &TempDir) -> (PathBuf, PathBuf) {
    let modules = dir.path().join("modules.csv");
    let supervisors = dir.path().join("supervisors.csv");
    fs::write(&modules, MODULES).expect("Failed to write modules");
    fs::write(&supervisors, SUPERVISORS).expect("Failed to write supervisors");
    (modules, supervisors)
}

#[test]
fn stop_policy_keeps_records_before_bad_line() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (modules, supervisors) = write_catalogues(&dir);

    let ds = DataSystem::from_files(&modules, &supervisors, LoadPolicy::Stop).unwrap();

    let codes: Vec<String> = ds.modules().iter().map(|m| m.code().to_string()).collect();
    assert_eq!(codes, vec!["CSC1021"]);
    assert_eq!(ds.supervisors().len(), 2);
}

#[test]
fn skip_policy_keeps_every_good_line() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (modules, supervisors) = write_catalogues(&dir);

    let modules = load_modules(&modules, LoadPolicy::Skip).unwrap();
    let supervisors = load_supervisors(&supervisors, LoadPolicy::Skip).unwrap();

    assert_eq!(modules.len(), 2);
    assert_eq!(supervisors.len(), 2);
    assert_eq!(supervisors[1].full_name(), "Jason Steggles");
}

#[test]
fn fail_policy_reports_first_bad_line() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (modules, supervisors) = write_catalogues(&dir);

    match DataSystem::from_files(&modules, &supervisors, LoadPolicy::Fail) {
        Err(LoadError::Malformed { kind, line, .. }) => {
            assert_eq!(kind, "module");
            assert_eq!(line, 2);
        }
        other => panic!("expected a malformed module error, got {other:?}"),
    }

    match load_supervisors(&supervisors, LoadPolicy::Fail) {
        Err(LoadError::Malformed { kind, line, .. }) => {
            assert_eq!(kind, "supervisor");
            assert_eq!(line, 4);
        }
        other => panic!("expected a malformed supervisor error, got {other:?}"),
    }
}

#[test]
fn missing_file_depends_on_policy() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nothing.csv");

    let ds = DataSystem::from_files(&missing, &missing, LoadPolicy::Stop).unwrap();
    assert!(ds.modules().is_empty());
    assert!(ds.supervisors().is_empty());

    assert!(matches!(
        DataSystem::from_files(&missing, &missing, LoadPolicy::Fail),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn registry_loads_from_config_paths() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (modules, supervisors) = write_catalogues(&dir);

    let mut config = Config::from_defaults();
    config
        .set("modules_file", &modules.to_string_lossy())
        .expect("Failed to set modules_file");
    config
        .set("supervisors_file", &supervisors.to_string_lossy())
        .expect("Failed to set supervisors_file");
    config.set("load_policy", "skip").expect("Failed to set load_policy");

    let ds = DataSystem::from_config(&config).unwrap();
    assert_eq!(ds.modules().len(), 2);
    assert!(ds.module("csc1023").is_some());
    assert!(ds.supervisor("Neil Speirs").is_some());
}

#[test]
fn bundled_catalogues_load_cleanly() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");

    let ds = DataSystem::from_files(
        root.join("modules.csv"),
        root.join("supervisors.csv"),
        LoadPolicy::Fail,
    )
    .unwrap();

    assert_eq!(ds.modules().len(), 21);
    assert_eq!(ds.supervisors().len(), 4);
}
