pub mod add;
pub mod doctor;
pub mod entry;
pub mod output;

use marksplice_core::config::{ConfigLoader, ResolvedConfig, default_config_path};
use std::path::Path;

/// Load config for a command and install logging, or exit with a FAIL line.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, command: &str) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc);
            rc
        }
        Err(e) => {
            eprintln!("FAIL msp {command}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Flush logs and exit with failure.
pub fn fail() -> ! {
    crate::logging::flush();
    std::process::exit(1);
}
