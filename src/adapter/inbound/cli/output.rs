//! Astral-style CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and verbosity levels.

use std::fmt::Display;
use std::sync::{Mutex, OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use serde_json::json;

use crate::domain::notification::{Lifetime, Notification, Severity};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Spinner currently drawing on the terminal, if any.
static ACTIVE_SPINNER: OnceLock<Mutex<Option<indicatif::ProgressBar>>> = OnceLock::new();

fn with_active_spinner<R>(f: impl FnOnce(&mut Option<indicatif::ProgressBar>) -> R) -> R {
    let cell = ACTIVE_SPINNER.get_or_init(|| Mutex::new(None));
    match cell.lock() {
        Ok(mut slot) => f(&mut slot),
        Err(poisoned) => f(&mut poisoned.into_inner()),
    }
}

/// Run `print` with the active spinner cleared from the terminal.
fn suspend_spinner(print: impl FnOnce()) {
    match with_active_spinner(|slot| slot.clone()) {
        Some(pb) => pb.suspend(print),
        None => print(),
    }
}

/// Style `value` when the target stream supports color and `--color` allows it.
fn paint(stream: Stream, value: impl Display, style: Style) -> String {
    value
        .if_supports_color(stream, |t| t.style(style))
        .to_string()
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit_json_line(
            "header",
            json!({
                "app": "marketwright",
                "version": version,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "{} {}",
        paint(Stream::Stdout, "marketwright", Style::new().bold()),
        paint(Stream::Stdout, version, Style::new().dimmed())
    );
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {:<12} {}",
        paint(Stream::Stdout, label, Style::new().dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", paint(Stream::Stdout, "✓", Style::new().green()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", paint(Stream::Stdout, "⚠", Style::new().yellow()), message);
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", paint(Stream::Stderr, "×", Style::new().red()), message);
}

/// Print a user notification.
///
/// Warnings and errors are shown even in quiet mode. Persistent
/// notifications are marked, since a terminal line cannot auto-dismiss.
pub fn notification(notification: &Notification) {
    let config = read_config();
    let persistent = notification.lifetime.is_persistent();

    if config.json {
        let duration_ms = match notification.lifetime {
            Lifetime::Timed(d) => Some(d.as_millis() as u64),
            Lifetime::Persistent => None,
        };
        emit_json_line(
            "notification",
            json!({
                "title": notification.title,
                "description": notification.description,
                "severity": notification.severity,
                "duration_ms": duration_ms,
                "dismissible": notification.dismissible,
            }),
        );
        return;
    }

    let title = format!("{}:", notification.title);
    let pin = if persistent {
        format!(" {}", paint(Stream::Stdout, "(pinned)", Style::new().dimmed()))
    } else {
        String::new()
    };

    suspend_spinner(|| {
        match notification.severity {
            Severity::Success => {
                if regular_output_suppressed(config) {
                    return;
                }
                println!(
                    "  {} {} {}{}",
                    paint(Stream::Stdout, "✓", Style::new().green()),
                    paint(Stream::Stdout, title, Style::new().bold()),
                    notification.description,
                    pin
                );
            }
            Severity::Warning => println!(
                "  {} {} {}{}",
                paint(Stream::Stdout, "⚠", Style::new().yellow()),
                paint(Stream::Stdout, title, Style::new().bold()),
                notification.description,
                pin
            ),
            Severity::Error => eprintln!(
                "  {} {} {}{}",
                paint(Stream::Stderr, "×", Style::new().red()),
                paint(Stream::Stderr, title, Style::new().bold()),
                notification.description,
                pin
            ),
        }
    });
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", paint(Stream::Stdout, title, Style::new().bold()));
}

/// Braille spinner animation frames (Astral-style).
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner with Astral-style braille animation.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = read_config();
    if config.json || config.quiet {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    with_active_spinner(|slot| *slot = Some(pb.clone()));
    pb
}

/// Stop a spinner from [`spinner`] and erase it.
pub fn finish_spinner(pb: &indicatif::ProgressBar) {
    with_active_spinner(|slot| *slot = None);
    pb.finish_and_clear();
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    paint(Stream::Stdout, value, Style::new().cyan())
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    paint(Stream::Stdout, value, Style::new().dimmed())
}

/// Print a note/hint.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", paint(Stream::Stdout, message, Style::new().dimmed()));
}

/// Print a hint with "hint:" prefix (Astral-style).
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {}: {}",
        paint(Stream::Stdout, "hint", Style::new().cyan().dimmed()),
        paint(Stream::Stdout, message, Style::new().dimmed())
    );
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("lines", json!({ "content": content }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {}", line);
    }
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{}", value);
}
