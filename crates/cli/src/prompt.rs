//! Collecting the entry text from the user.
//!
//! Input comes from, in order:
//! - an explicit `--text` value
//! - an interactive prompt (single line, or `$EDITOR` for multi-line)
//! - piped stdin when not attached to a terminal
//! - the configured default

use dialoguer::{Editor, Input, theme::ColorfulTheme};
use std::io::{self, IsTerminal, Read};

/// How to ask for an entry.
#[derive(Debug, Clone, Default)]
pub struct InputSpec<'a> {
    pub prompt: &'a str,
    pub default: &'a str,
    pub multiline: bool,
}

/// Error type for input collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Obtain the entry text. An empty string is a valid entry.
pub fn collect_input(
    provided: Option<&str>,
    spec: &InputSpec<'_>,
    batch_mode: bool,
) -> Result<String, PromptError> {
    if let Some(text) = provided {
        return Ok(text.to_string());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        if batch_mode {
            return Ok(spec.default.to_string());
        }
        return if spec.multiline { prompt_multiline(spec) } else { prompt_line(spec) };
    }

    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok(from_piped(buf, spec.default))
}

/// Piped input minus one trailing line ending; empty input means the default.
fn from_piped(buf: String, default: &str) -> String {
    if buf.is_empty() {
        return default.to_string();
    }
    let trimmed = buf
        .strip_suffix("\r\n")
        .or_else(|| buf.strip_suffix('\n'))
        .unwrap_or(&buf);
    trimmed.to_string()
}

fn prompt_line(spec: &InputSpec<'_>) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(spec.prompt)
        .allow_empty(true);

    if !spec.default.is_empty() {
        input = input.default(spec.default.to_string());
    }

    input.interact_text().map_err(dialoguer_error_to_prompt_error)
}

fn prompt_multiline(spec: &InputSpec<'_>) -> Result<String, PromptError> {
    eprintln!("{} (opening editor, save and close to continue)", spec.prompt);

    let edited = Editor::new()
        .edit(spec.default)
        .map_err(|e| PromptError::Io(io::Error::other(e)))?;

    match edited {
        Some(text) => Ok(from_piped(text, "")),
        None => Err(PromptError::Cancelled),
    }
}

fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_text_wins() {
        let spec = InputSpec { prompt: "Entry", default: "fallback", multiline: false };
        assert_eq!(collect_input(Some("given"), &spec, true).unwrap(), "given");
        assert_eq!(collect_input(Some(""), &spec, true).unwrap(), "");
    }

    #[test]
    fn piped_input_drops_one_trailing_newline() {
        assert_eq!(from_piped("line\n".into(), "d"), "line");
        assert_eq!(from_piped("line\r\n".into(), "d"), "line");
        assert_eq!(from_piped("a\nb\n\n".into(), "d"), "a\nb\n");
        assert_eq!(from_piped("no newline".into(), "d"), "no newline");
    }

    #[test]
    fn empty_piped_input_uses_default() {
        assert_eq!(from_piped(String::new(), "fallback"), "fallback");
        assert_eq!(from_piped("\n".into(), "fallback"), "");
    }
}
