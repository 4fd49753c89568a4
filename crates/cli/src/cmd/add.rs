use std::path::Path;

use chrono::Local;
use marksplice_core::config::ResolvedConfig;
use marksplice_core::entry::{
    AddRequest, EntryError, add_to_note, build_render_context, compose_fragment,
    render_placeholders,
};
use marksplice_core::splice::{InsertMode, SectionedTextEditor, SpliceError};
use marksplice_core::store::{DocumentStore, VaultStore};

use crate::AddArgs;
use crate::InputArgs;
use crate::cmd::output::{AddOutput, print_success, report_error};
use crate::cmd::{fail, load_config};
use crate::prompt::{InputSpec, collect_input};

/// Where and how an entry goes, before placeholders are rendered.
pub struct EntryTarget<'a> {
    pub note: &'a str,
    pub section: &'a str,
    pub mode: InsertMode,
    pub prefix: &'a str,
    pub suffix: &'a str,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &AddArgs) {
    let cfg = load_config(config, profile, "add");

    let target = EntryTarget {
        note: &args.note,
        section: &args.section,
        mode: if args.prepend { InsertMode::Prepend } else { InsertMode::Append },
        prefix: &args.prefix,
        suffix: &args.suffix,
    };
    let spec = InputSpec {
        prompt: &args.prompt,
        default: &args.default,
        multiline: args.multiline,
    };

    execute(&cfg, "add", &target, &spec, &args.input);
}

/// Resolve the note, collect input, insert, and report.
pub fn execute(
    cfg: &ResolvedConfig,
    command: &str,
    target: &EntryTarget<'_>,
    spec: &InputSpec<'_>,
    input: &InputArgs,
) {
    let mut ctx = build_render_context(Local::now(), &cfg.vault_root);
    for (key, value) in &input.vars {
        ctx.insert(key.clone(), value.clone());
    }

    let note = render_placeholders(target.note, &ctx);
    ctx.insert("note".into(), note.clone());
    let prefix = render_placeholders(target.prefix, &ctx);
    let suffix = render_placeholders(target.suffix, &ctx);

    let store = match VaultStore::with_exclusions(&cfg.vault_root, cfg.excluded_folders.clone())
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("FAIL msp {command}");
            eprintln!("{e}");
            fail();
        }
    };

    // Check the note and section before asking for input
    if let Err(e) = preflight(&store, &note, target.section) {
        eprintln!("FAIL msp {command}");
        report_error(&e);
        fail();
    }

    let text = match collect_input(input.text.as_deref(), spec, input.batch) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("FAIL msp {command}");
            eprintln!("{e}");
            fail();
        }
    };

    let request = AddRequest {
        note,
        section: target.section.to_string(),
        mode: target.mode,
        fragment: compose_fragment(&prefix, &text, &suffix),
    };

    match add_to_note(&store, &request) {
        Ok(outcome) => {
            let output = AddOutput::new(&outcome, &request.section, request.mode);
            print_success(command, &output, input.json);
        }
        Err(e) => {
            eprintln!("FAIL msp {command}");
            report_error(&e);
            fail();
        }
    }
}

fn preflight<S: DocumentStore>(store: &S, note: &str, section: &str) -> Result<(), EntryError> {
    let doc_ref = store.resolve(note)?;
    let document = store.read_document(&doc_ref)?;

    if SectionedTextEditor::section_exists(&document.content, section) {
        Ok(())
    } else {
        Err(SpliceError::SectionNotFound {
            marker: section.to_string(),
            document: document.id,
        }
        .into())
    }
}
