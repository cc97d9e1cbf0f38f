//! Console state: emission API, processing pipeline, and section stack

use std::io::{self, Stdout, Write};

use sconsole_core::prelude::*;
use sconsole_core::{kinds, should_show, LogOptions, LogRecord, Mode, ShowSections, Value};

use crate::config::ConsoleSettings;

/// One indentation unit per section depth
pub const INDENT_UNIT: &str = "\t";

/// Filters, formats, and prints log records
///
/// Owns the display configuration and the section stack. All state is
/// mutated in place; a logger is meant to be driven from one thread.
#[derive(Debug)]
pub struct ConsoleLogger<W: Write = Stdout> {
    sink: W,
    mode: Mode,
    show_headers: bool,
    show_types: bool,
    show_sections: ShowSections,
    use_indented_sections: bool,
    /// Section names by depth. Entries above the current depth are kept
    /// and may be reused by name in `end_section`.
    sections: Vec<String>,
    /// -1 when no section is active
    section_depth: isize,
    first_section_log_occurred: bool,
    last_message: Option<String>,
}

impl ConsoleLogger<Stdout> {
    /// Logger writing to stdout with default settings
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleLogger<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleLogger<W> {
    pub fn new(sink: W) -> Self {
        Self::from_settings(&ConsoleSettings::default(), sink)
    }

    pub fn from_settings(settings: &ConsoleSettings, sink: W) -> Self {
        let mut logger = Self {
            sink,
            mode: Mode::default(),
            show_headers: true,
            show_types: false,
            show_sections: ShowSections::default(),
            use_indented_sections: true,
            sections: Vec::new(),
            section_depth: -1,
            first_section_log_occurred: false,
            last_message: None,
        };
        logger.apply_settings(settings);
        logger
    }

    /// Replace the display configuration; the section stack is untouched
    pub fn apply_settings(&mut self, settings: &ConsoleSettings) {
        self.mode = settings.mode;
        self.show_headers = settings.show_headers;
        self.show_types = settings.show_types;
        self.show_sections = settings.show_sections;
        self.use_indented_sections = settings.use_indented_sections;
    }

    /// Snapshot of the current display configuration
    pub fn settings(&self) -> ConsoleSettings {
        ConsoleSettings {
            mode: self.mode,
            show_headers: self.show_headers,
            show_types: self.show_types,
            show_sections: self.show_sections,
            use_indented_sections: self.use_indented_sections,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Set the mode by name. Unknown names switch to [`Mode::Silent`].
    pub fn set_mode_name(&mut self, name: &str) {
        self.mode = match name.parse::<Mode>() {
            Ok(mode) => mode,
            Err(e) => {
                warn!("{}; console falls back to silent", e);
                Mode::Silent
            }
        };
    }

    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    pub fn set_show_headers(&mut self, show: bool) {
        self.show_headers = show;
    }

    pub fn show_types(&self) -> bool {
        self.show_types
    }

    pub fn set_show_types(&mut self, show: bool) {
        self.show_types = show;
    }

    pub fn show_sections(&self) -> ShowSections {
        self.show_sections
    }

    pub fn set_show_sections(&mut self, show: ShowSections) {
        self.show_sections = show;
    }

    pub fn use_indented_sections(&self) -> bool {
        self.use_indented_sections
    }

    pub fn set_use_indented_sections(&mut self, indent: bool) {
        self.use_indented_sections = indent;
    }

    /// The last line actually printed by the pipeline
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    // ─────────────────────────────────────────────────────────────
    // Emission API
    // ─────────────────────────────────────────────────────────────

    /// A generic message (priority 3)
    pub fn log(&mut self, message: impl Into<Value>) {
        self.log_with(message, LogOptions::default());
    }

    pub fn log_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        self.emit(message, LogOptions::default(), options);
    }

    /// Extra detail, shown only in verbose mode
    pub fn log_verbose(&mut self, message: impl Into<Value>) {
        self.log_verbose_with(message, LogOptions::default());
    }

    pub fn log_verbose_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        let defaults = LogOptions::new().priority(1).kind(kinds::VERBOSE);
        self.emit(message, defaults, options);
    }

    pub fn log_important(&mut self, message: impl Into<Value>) {
        self.log_important_with(message, LogOptions::default());
    }

    pub fn log_important_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        self.emit(message, LogOptions::new().priority(4), options);
    }

    pub fn log_critical(&mut self, message: impl Into<Value>) {
        self.log_critical_with(message, LogOptions::default());
    }

    pub fn log_critical_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        self.emit(message, LogOptions::new().priority(5), options);
    }

    pub fn log_error(&mut self, message: impl Into<Value>) {
        self.log_error_with(message, LogOptions::default());
    }

    pub fn log_error_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        let defaults = LogOptions::new().priority(4).kind(kinds::ERROR);
        self.emit(message, defaults, options);
    }

    /// A low priority error; hidden in normal mode, shown in error mode
    pub fn log_verbose_error(&mut self, message: impl Into<Value>) {
        self.log_verbose_error_with(message, LogOptions::default());
    }

    pub fn log_verbose_error_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        let defaults = LogOptions::new().priority(1).kind(kinds::ERROR);
        self.emit(message, defaults, options);
    }

    pub fn log_progress(&mut self, message: impl Into<Value>) {
        self.log_progress_with(message, LogOptions::default());
    }

    pub fn log_progress_with(&mut self, message: impl Into<Value>, options: LogOptions) {
        self.emit(message, LogOptions::new().kind(kinds::PROGRESS), options);
    }

    fn emit(&mut self, message: impl Into<Value>, defaults: LogOptions, options: LogOptions) {
        let record = LogRecord::new(message, defaults.merge(options));
        self.process_log_item(&record);
    }

    // ─────────────────────────────────────────────────────────────
    // Pipeline
    // ─────────────────────────────────────────────────────────────

    pub fn should_show_item(&self, record: &LogRecord) -> bool {
        should_show(self.mode, record)
    }

    /// Filter, format, and print one record
    pub fn process_log_item(&mut self, record: &LogRecord) {
        if !self.should_show_item(record) {
            return;
        }

        let mut msg = record.render(self.show_headers, self.show_types);

        let label_pending =
            self.show_sections != ShowSections::FirstLog || !self.first_section_log_occurred;
        if self.show_sections.labels_lines() && label_pending {
            if let Some(section) = self.active_section() {
                msg = format!("[{}] {}", section, msg);
            }
            self.first_section_log_occurred = true;
        }

        if self.use_indented_sections {
            msg = format!("{}{}", self.section_indentation(), msg);
        }

        self.write_line(&msg);
        self.last_message = Some(msg);
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.sink, "{}", line).and_then(|_| self.sink.flush()) {
            warn!("{}", Error::output(e.to_string()));
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────

    /// Open a section nested inside the current one
    pub fn start_section(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.section_depth += 1;
        let index = self.section_depth as usize;
        if index < self.sections.len() {
            self.sections[index] = name.clone();
        } else {
            self.sections.push(name.clone());
        }
        self.first_section_log_occurred = false;
        debug!("Section '{}' started at depth {}", name, self.section_depth);

        if self.mode.shows_section_headers() && self.show_sections.prints_header() {
            self.write_line(&format!("\n\n[{}]\n", name));
        }
    }

    /// Close a section.
    ///
    /// With no name the innermost section closes. With a name, that section
    /// and everything nested inside it close; an unknown or empty name closes
    /// only the innermost section.
    pub fn end_section(&mut self, name: Option<&str>) {
        let name = name.filter(|n| !n.is_empty());
        let found = name.and_then(|n| self.sections.iter().position(|s| s == n));
        let new_depth = match found {
            Some(index) => index as isize - 1,
            None => {
                if let Some(n) = name {
                    debug!("Section '{}' not found, closing innermost", n);
                }
                self.section_depth - 1
            }
        };
        self.section_depth = new_depth.max(-1);
        debug!("Section depth now {}", self.section_depth);
    }

    /// Current depth; -1 when no section is active
    pub fn section_depth(&self) -> isize {
        self.section_depth
    }

    /// Name recorded at the current depth
    pub fn active_section(&self) -> Option<&str> {
        usize::try_from(self.section_depth)
            .ok()
            .and_then(|depth| self.sections.get(depth))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Indentation for the current depth
    pub fn section_indentation(&self) -> String {
        Self::indentation_for(self.section_depth)
    }

    /// One [`INDENT_UNIT`] per open section: depth 0 gets one unit, -1 none
    pub fn indentation_for(depth: isize) -> String {
        INDENT_UNIT.repeat((depth + 1).max(0) as usize)
    }
}
