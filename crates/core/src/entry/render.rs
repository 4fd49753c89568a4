//! Placeholder rendering and fragment composition for entries.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;

/// Variables available to `{{name}}` placeholders.
pub type RenderContext = HashMap<String, String>;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").expect("valid regex")
});

/// Build the built-in context (date, time, datetime, vault_root) for a moment in time.
pub fn build_render_context(now: DateTime<Local>, vault_root: &Path) -> RenderContext {
    let mut ctx = RenderContext::new();
    ctx.insert("date".into(), now.format("%Y-%m-%d").to_string());
    ctx.insert("time".into(), now.format("%H:%M").to_string());
    ctx.insert("datetime".into(), now.to_rfc3339());
    ctx.insert("vault_root".into(), vault_root.to_string_lossy().to_string());
    ctx
}

/// Replace `{{name}}` placeholders with context values.
///
/// Unknown placeholders are left as written.
pub fn render_placeholders(template: &str, ctx: &RenderContext) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            ctx.get(&caps[1]).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Concatenate prefix, user input and suffix verbatim.
pub fn compose_fragment(prefix: &str, input: &str, suffix: &str) -> String {
    let mut fragment = String::with_capacity(prefix.len() + input.len() + suffix.len());
    fragment.push_str(prefix);
    fragment.push_str(input);
    fragment.push_str(suffix);
    fragment
}
