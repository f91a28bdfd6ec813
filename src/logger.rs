//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` and `debug_do!` for output shown only with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("nobg"; "reading {}", input.display());
//! debug!("nobg"; "{}x{}", width, height);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Execute code only when --verbose is enabled
///
/// Use this to avoid computing expensive debug data when not needed.
///
/// # Usage
/// ```ignore
/// debug_do! {
///     let summary = expensive_computation();
///     debug!("module"; "result: {:?}", summary);
/// }
/// ```
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {{
        if $crate::logger::is_verbose() {
            $($body)*
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Errors go to stderr, everything else to stdout.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let line = format_line(module, &module_lower, message);

    if module_lower == "error" {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{line}").ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }
}

#[inline]
fn format_line(module: &str, module_lower: &str, message: &str) -> String {
    format!("{} {message}", colorize_prefix(module, module_lower))
}

/// Apply color to a module prefix based on module type.
///
/// Respects the global override set from `--color`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let (stream, style) = match module_lower {
        "nobg" => (Stream::Stdout, Style::new().bright_blue().bold()),
        "save" => (Stream::Stdout, Style::new().bright_green().bold()),
        "error" => (Stream::Stderr, Style::new().bright_red().bold()),
        _ => (Stream::Stdout, Style::new().bright_yellow().bold()),
    };
    prefix
        .if_supports_color(stream, |text| text.style(style))
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_keeps_module_and_message() {
        let line = format_line("nobg", "nobg", "reading logo.jpg");
        assert!(line.contains("[nobg]"));
        assert!(line.ends_with(" reading logo.jpg"));
    }

    #[test]
    fn test_prefix_preserves_original_case() {
        assert!(colorize_prefix("Error", "error").contains("[Error]"));
    }
}
