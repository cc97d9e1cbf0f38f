//! Log record model and rendering

use crate::mode::PRIORITY_LEVELS;
use crate::value::Value;

/// Well-known record types. Any other string is accepted as-is.
pub mod kinds {
    pub const NORMAL: &str = "normal";
    pub const VERBOSE: &str = "verbose";
    pub const ERROR: &str = "error";
    pub const PROGRESS: &str = "progress";
}

/// Caller-supplied record configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogOptions {
    pub priority: Option<u8>,
    pub kind: Option<String>,
    pub header: Option<String>,
    pub args: Option<Value>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn args(mut self, args: impl Into<Value>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Layer `overrides` on top of `self`; any field set in `overrides` wins
    pub fn merge(self, overrides: LogOptions) -> LogOptions {
        LogOptions {
            priority: overrides.priority.or(self.priority),
            kind: overrides.kind.or(self.kind),
            header: overrides.header.or(self.header),
            args: overrides.args.or(self.args),
        }
    }
}

/// One message with its priority, type, and optional header
///
/// Records are built per call and never mutated. Zero priorities and empty
/// type/header strings count as unset.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    message: Value,
    priority: u8,
    kind: String,
    header: Option<String>,
    args: Option<Value>,
}

impl LogRecord {
    pub fn new(message: impl Into<Value>, options: LogOptions) -> Self {
        Self {
            message: message.into(),
            priority: options
                .priority
                .filter(|p| *p != 0)
                .unwrap_or(PRIORITY_LEVELS.normal),
            kind: options
                .kind
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| kinds::NORMAL.to_string()),
            header: options.header.filter(|h| !h.is_empty()),
            args: options.args,
        }
    }

    /// Record with all defaults
    pub fn plain(message: impl Into<Value>) -> Self {
        Self::new(message, LogOptions::default())
    }

    pub fn message(&self) -> &Value {
        &self.message
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// The record type ("normal", "error", ...)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn args(&self) -> Option<&Value> {
        self.args.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.kind == kinds::ERROR
    }

    /// Render the record as a single line of text.
    ///
    /// Layout: `" (<header>) "`, then `" <<type>> "`, then the body. A
    /// structured body renders every field as `"key: value, "`, including
    /// the last one.
    pub fn render(&self, show_header: bool, show_type: bool) -> String {
        let mut msg = String::new();

        if show_header {
            if let Some(header) = &self.header {
                msg.push_str(&format!(" ({}) ", header));
            }
        }
        if show_type {
            msg.push_str(&format!(" <{}> ", self.kind));
        }

        if self.message.is_structured() {
            for (key, value) in self.message.entries() {
                msg.push_str(&format!("{}: {}, ", key, value.field_text()));
            }
        } else {
            msg.push_str(&self.message.to_string());
        }

        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Fields;

    #[test]
    fn test_defaults() {
        let record = LogRecord::plain("hello");
        assert_eq!(record.priority(), 3);
        assert_eq!(record.kind(), "normal");
        assert_eq!(record.header(), None);
        assert_eq!(record.args(), None);
    }

    #[test]
    fn test_zero_priority_and_empty_strings_are_unset() {
        let record = LogRecord::new("x", LogOptions::new().priority(0).kind("").header(""));
        assert_eq!(record.priority(), 3);
        assert_eq!(record.kind(), "normal");
        assert_eq!(record.header(), None);
    }

    #[test]
    fn test_args_are_stored_only() {
        let record = LogRecord::new("x", LogOptions::new().args(Fields::new().with("id", 7)));
        assert!(record.args().is_some());
        assert_eq!(record.render(true, true), " <normal> x");
    }

    #[test]
    fn test_render_plain_text() {
        assert_eq!(LogRecord::plain("hello").render(true, false), "hello");
    }

    #[test]
    fn test_render_header_before_type() {
        let record = LogRecord::new("body", LogOptions::new().header("db").kind("error"));
        assert_eq!(record.render(true, true), " (db)  <error> body");
        assert_eq!(record.render(false, true), " <error> body");
        assert_eq!(record.render(true, false), " (db) body");
    }

    #[test]
    fn test_render_structured_keeps_trailing_separator() {
        let record = LogRecord::plain(Fields::new().with("a", 1).with("b", "x"));
        assert_eq!(record.render(false, false), "a: 1, b: x, ");
    }

    #[test]
    fn test_render_nested_and_callable_fields() {
        let record = LogRecord::plain(
            Fields::new()
                .with("inner", Fields::new().with("deep", true))
                .with("list", vec!["a", "b"])
                .with("cb", Value::Callable)
                .with("none", Value::Null),
        );
        assert_eq!(
            record.render(false, false),
            "inner: { ... }, list: { ... }, cb: function (), none: { ... }, "
        );
    }

    #[test]
    fn test_render_null_field_collapses() {
        let record = LogRecord::plain(Fields::new().with("a", Value::Null));
        assert_eq!(record.render(false, false), "a: { ... }, ");
    }

    #[test]
    fn test_render_list_message_uses_indices() {
        let record = LogRecord::plain(vec!["x", "y"]);
        assert_eq!(record.render(false, false), "0: x, 1: y, ");
    }

    #[test]
    fn test_render_empty_structure() {
        assert_eq!(LogRecord::plain(Fields::new()).render(true, false), "");
    }

    #[test]
    fn test_render_number_message() {
        assert_eq!(LogRecord::plain(42).render(false, false), "42");
    }

    #[test]
    fn test_merge_overrides_win() {
        let defaults = LogOptions::new().priority(1).kind("verbose");
        let merged = defaults.merge(LogOptions::new().priority(5).header("h"));
        assert_eq!(merged.priority, Some(5));
        assert_eq!(merged.kind.as_deref(), Some("verbose"));
        assert_eq!(merged.header.as_deref(), Some("h"));
    }

    #[test]
    fn test_is_error() {
        assert!(LogRecord::new("x", LogOptions::new().kind("error")).is_error());
        assert!(!LogRecord::plain("x").is_error());
    }
}
