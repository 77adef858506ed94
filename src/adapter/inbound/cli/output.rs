//! CLI status output.
//!
//! Human-readable lines go to stdout with colored markers; in JSON mode each
//! line becomes one `{"type": ..., "payload": ...}` object so scripts can
//! parse everything the CLI prints. Errors always go to stderr.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Output switches taken from the global `--json` and `--quiet` flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// One JSON object per line instead of colored text.
    pub json: bool,
    /// Drop status lines; reports and errors are still printed.
    pub quiet: bool,
}

impl OutputConfig {
    /// Build the switches from parsed flags.
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

/// Kind tag of a status line, used as the `type` field in JSON mode.
#[derive(Debug, Clone, Copy)]
enum Line {
    Section,
    Field,
    Success,
    Note,
    Error,
}

impl Line {
    const fn tag(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Field => "field",
            Self::Success => "success",
            Self::Note => "note",
            Self::Error => "error",
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn encode(line: Line, payload: Value) -> Value {
    json!({ "type": line.tag(), "payload": payload })
}

/// Print a status line to stdout: `payload` in JSON mode, `text()` otherwise.
/// Quiet mode only silences the text form.
fn status(line: Line, payload: Value, text: impl FnOnce() -> String) {
    let config = current();
    if config.json {
        println!("{}", encode(line, payload));
    } else if !config.quiet {
        println!("{}", text());
    }
}

/// Install the output switches. Call once, before any handler prints.
pub fn configure(config: OutputConfig) {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(config));
    match cell.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Whether handlers should emit machine-readable output.
#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Print a bold heading preceded by a blank line.
pub fn section(title: &str) {
    status(Line::Section, json!({ "title": title }), || {
        format!("\n{}", title.bold())
    });
}

/// Print a dimmed label with its value, labels aligned in one column.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    status(
        Line::Field,
        json!({ "label": label, "value": value }),
        || format!("  {:<18} {}", label.dimmed(), value),
    );
}

/// Print a green check line.
pub fn success(message: &str) {
    status(Line::Success, json!({ "message": message }), || {
        format!("  {} {}", "✓".green(), message)
    });
}

/// Print a dimmed remark, e.g. that a report came back empty.
pub fn note(message: &str) {
    status(Line::Note, json!({ "message": message }), || {
        format!("  {}", message.dimmed())
    });
}

/// Print a failure to stderr. Never silenced by quiet mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", encode(Line::Error, json!({ "message": message })));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Color a value cyan for text mode; JSON mode keeps it plain.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        format!("{}", value.cyan())
    }
}
