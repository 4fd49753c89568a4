mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "msp", version, about = "Append and prepend entries to notes in a markdown vault")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Insert an entry into a note next to a section marker
    Add(AddArgs),

    /// Run a configured entry preset
    Entry(EntryArgs),
}

/// Options shared by commands that collect input and write a note.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Entry text; skips prompting
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Placeholder value for {{key}} in note, prefix and suffix (repeatable)
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Never prompt; read input from stdin or fall back to the default
    #[arg(long)]
    pub batch: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Note name (basename or vault-relative path)
    pub note: String,

    /// Literal marker to insert next to; omit for start/end of note
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub section: String,

    /// Insert before the marker (or at the start of the note) instead of after
    #[arg(long)]
    pub prepend: bool,

    /// Text placed before the entry
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub prefix: String,

    /// Text placed after the entry
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub suffix: String,

    /// Prompt shown when asking for the entry
    #[arg(long, default_value = "Entry")]
    pub prompt: String,

    /// Pre-filled entry value
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub default: String,

    /// Ask for multi-line input using $EDITOR
    #[arg(long)]
    pub multiline: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct EntryArgs {
    /// Preset name from the [entries] config table
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// List configured presets
    #[arg(long, conflicts_with = "name")]
    pub list: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Add(args) => {
            cmd::add::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Entry(args) => {
            if args.list {
                cmd::entry::list(cli.config.as_deref(), cli.profile.as_deref());
            } else if let Some(name) = args.name.as_deref() {
                cmd::entry::run(
                    cli.config.as_deref(),
                    cli.profile.as_deref(),
                    name,
                    &args.input,
                );
            }
        }
    }

    logging::flush();
}
