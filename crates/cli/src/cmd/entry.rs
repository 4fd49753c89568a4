use std::path::Path;

use marksplice_core::entry::EntryMode;
use tabled::{Table, Tabled, settings::Style};

use crate::InputArgs;
use crate::cmd::add::{EntryTarget, execute};
use crate::cmd::{fail, load_config};
use crate::prompt::InputSpec;

/// Row for the entry preset table.
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Run a configured entry preset.
pub fn run(config: Option<&Path>, profile: Option<&str>, name: &str, input: &InputArgs) {
    let cfg = load_config(config, profile, "entry");

    let Some(preset) = cfg.entry(name).cloned() else {
        eprintln!("Entry not found: {name}");
        if cfg.entries.is_empty() {
            eprintln!("No entries are configured. Add an [entries.<name>] table to the config.");
        } else {
            eprintln!("Available entries:");
            for key in cfg.entries.keys() {
                eprintln!("  - {key}");
            }
        }
        fail();
    };

    tracing::debug!(entry = name, note = %preset.note, "running entry preset");

    let target = EntryTarget {
        note: &preset.note,
        section: &preset.section,
        mode: preset.mode.into(),
        prefix: &preset.prefix,
        suffix: &preset.suffix,
    };
    let spec = InputSpec {
        prompt: &preset.prompt,
        default: &preset.default,
        multiline: preset.multiline,
    };

    execute(&cfg, "entry", &target, &spec, input);
}

/// Print configured entry presets.
pub fn list(config: Option<&Path>, profile: Option<&str>) {
    let cfg = load_config(config, profile, "entry");

    if cfg.entries.is_empty() {
        println!("(no entries configured)");
        return;
    }

    let rows: Vec<EntryRow> = cfg
        .entries
        .iter()
        .map(|(name, spec)| EntryRow {
            name: name.clone(),
            note: spec.note.clone(),
            section: if spec.section.is_empty() {
                "(whole note)".to_string()
            } else {
                spec.section.clone()
            },
            mode: match spec.mode {
                EntryMode::Append => "append".to_string(),
                EntryMode::Prepend => "prepend".to_string(),
            },
            description: spec.description.clone().unwrap_or_default(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("-- {} entries --", rows.len());
}
