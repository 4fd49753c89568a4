use marksplice_core::config::{ConfigLoader, default_config_path};
use marksplice_core::store::VaultStore;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL msp doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc);

    println!("OK   msp doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("vault_root: {}", rc.vault_root.display());

    match VaultStore::new(&rc.vault_root) {
        Ok(store) => println!("vault: ok ({})", store.root().display()),
        Err(e) => println!("vault: {e}"),
    }

    for excluded in &rc.excluded_folders {
        println!("excluded: {}", excluded.display());
    }
    for (name, path) in &rc.folders {
        println!("folder.{name}: {}", path.display());
    }
    println!("entries: {}", rc.entries.len());
    if let Some(ref file) = rc.logging.file {
        println!("log_file: {}", file.display());
    }
}
