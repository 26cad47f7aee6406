use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub notify_color: bool,
    pub quiet: bool,
    pub term_width: Option<usize>,
}

const FALLBACK: UiPrefs = UiPrefs {
    table_color: false,
    progress: false,
    notify_color: false,
    quiet: false,
    term_width: None,
};

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let stdout_tty = std::io::stdout().is_terminal();
    let stderr_tty = std::io::stderr().is_terminal();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color: stdout_tty && flags.format == OutputFormat::Table && !no_color,
        progress: stderr_tty && !flags.quiet,
        notify_color: stderr_tty && !no_color,
        quiet: flags.quiet,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&FALLBACK)
}

/// One-line success notification on stderr. Suppressed by `--quiet`.
pub fn notify_success(message: &str) {
    let prefs = prefs();
    if prefs.quiet {
        return;
    }
    if prefs.notify_color {
        eprintln!("\u{1b}[32m✔\u{1b}[0m {message}");
    } else {
        eprintln!("✔ {message}");
    }
}

/// One-line warning on stderr, shown even with `--quiet`.
pub fn notify_warning(message: &str) {
    if prefs().notify_color {
        eprintln!("\u{1b}[33m!\u{1b}[0m {message}");
    } else {
        eprintln!("! {message}");
    }
}
