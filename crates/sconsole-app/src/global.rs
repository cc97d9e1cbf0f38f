//! Process-wide console
//!
//! A [`ConsoleLogger`] writing to stdout, reachable through free functions
//! so any part of an application can log without threading a handle
//! around. The state lives in a thread-local: each thread that logs gets
//! its own mode, flags, and section stack.

use std::cell::RefCell;
use std::io::Stdout;

use sconsole_core::{LogOptions, Mode, Value};

use crate::config::ConsoleSettings;
use crate::console::ConsoleLogger;

thread_local! {
    static CONSOLE: RefCell<ConsoleLogger<Stdout>> = RefCell::new(ConsoleLogger::stdout());
}

/// Run `f` against this thread's console
pub fn with_console<R>(f: impl FnOnce(&mut ConsoleLogger<Stdout>) -> R) -> R {
    CONSOLE.with(|console| f(&mut console.borrow_mut()))
}

/// Replace the display configuration of this thread's console
pub fn configure(settings: &ConsoleSettings) {
    with_console(|c| c.apply_settings(settings));
}

pub fn set_mode(mode: Mode) {
    with_console(|c| c.set_mode(mode));
}

/// Set the mode by name; unknown names silence the console
pub fn set_mode_name(name: &str) {
    with_console(|c| c.set_mode_name(name));
}

pub fn mode() -> Mode {
    with_console(|c| c.mode())
}

pub fn last_message() -> Option<String> {
    with_console(|c| c.last_message().map(str::to_string))
}

pub fn log(message: impl Into<Value>) {
    with_console(|c| c.log(message));
}

pub fn log_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_with(message, options));
}

pub fn log_verbose(message: impl Into<Value>) {
    with_console(|c| c.log_verbose(message));
}

pub fn log_verbose_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_verbose_with(message, options));
}

pub fn log_important(message: impl Into<Value>) {
    with_console(|c| c.log_important(message));
}

pub fn log_important_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_important_with(message, options));
}

pub fn log_critical(message: impl Into<Value>) {
    with_console(|c| c.log_critical(message));
}

pub fn log_critical_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_critical_with(message, options));
}

pub fn log_error(message: impl Into<Value>) {
    with_console(|c| c.log_error(message));
}

pub fn log_error_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_error_with(message, options));
}

pub fn log_verbose_error(message: impl Into<Value>) {
    with_console(|c| c.log_verbose_error(message));
}

pub fn log_verbose_error_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_verbose_error_with(message, options));
}

pub fn log_progress(message: impl Into<Value>) {
    with_console(|c| c.log_progress(message));
}

pub fn log_progress_with(message: impl Into<Value>, options: LogOptions) {
    with_console(|c| c.log_progress_with(message, options));
}

pub fn start_section(name: impl Into<String>) {
    with_console(|c| c.start_section(name));
}

pub fn end_section(name: Option<&str>) {
    with_console(|c| c.end_section(name));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test runs on its own thread, so each sees a fresh console.

    #[test]
    fn test_fresh_console_defaults() {
        assert_eq!(mode(), Mode::Normal);
        assert_eq!(last_message(), None);
        assert_eq!(with_console(|c| c.section_depth()), -1);
    }

    #[test]
    fn test_state_persists_between_calls() {
        set_mode(Mode::Error);
        log("normal line");
        assert_eq!(last_message(), None);

        log_verbose_error("low error");
        assert_eq!(last_message().as_deref(), Some("low error"));
    }

    #[test]
    fn test_unknown_mode_name() {
        set_mode_name("whisper");
        assert_eq!(mode(), Mode::Silent);
        log_critical("dropped");
        assert_eq!(last_message(), None);
    }

    #[test]
    fn test_sections_through_free_functions() {
        configure(&ConsoleSettings {
            show_sections: sconsole_core::ShowSections::Never,
            ..Default::default()
        });
        start_section("A");
        start_section("B");
        log("inner");
        assert_eq!(last_message().as_deref(), Some("\t\tinner"));
        end_section(Some("A"));
        log("outer");
        assert_eq!(last_message().as_deref(), Some("outer"));
    }
}
