//! Catalogue listing commands

use student_data::config::Config;
use student_data::error;
use student_data::DataSystem;

/// Load the registry described by `config`, exiting on a fatal load error
pub fn load_registry(config: &Config) -> DataSystem {
    match DataSystem::from_config(config) {
        Ok(ds) => ds,
        Err(e) => {
            error!("Catalogue load failed: {e}");
            eprintln!("✗ Failed to load catalogues: {e}");
            std::process::exit(1);
        }
    }
}

/// Print every module in the catalogue
pub fn run_modules(config: &Config) {
    let ds = load_registry(config);
    let modules = ds.modules();
    if modules.is_empty() {
        println!("No modules loaded from {}", config.data.modules_file);
        return;
    }

    println!("\n=== Modules ({}) ===\n", modules.len());
    for module in &modules {
        println!("  {:<10} {:<40} {:>3}", module.code(), module.name(), module.credits());
    }
}

/// Print every supervisor in the catalogue
pub fn run_supervisors(config: &Config) {
    let ds = load_registry(config);
    let supervisors = ds.supervisors();
    if supervisors.is_empty() {
        println!("No supervisors loaded from {}", config.data.supervisors_file);
        return;
    }

    println!("\n=== Supervisors ({}) ===\n", supervisors.len());
    for supervisor in &supervisors {
        println!("  {supervisor}");
    }
}
