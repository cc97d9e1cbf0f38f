//! Command-line front end: emit one record through a console

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use sconsole_app::config::{load_settings, try_load_settings};
use sconsole_app::ConsoleLogger;
use sconsole_core::prelude::*;
use sconsole_core::{LogOptions, Mode, ShowSections, Value};

/// Server Console - print a message through mode and section filtering
#[derive(Parser, Debug)]
#[command(name = "sconsole")]
#[command(about = "Print a message through mode and section filtering", long_about = None)]
pub struct Args {
    /// Message words, joined with spaces
    #[arg(value_name = "MESSAGE", required = true)]
    pub message: Vec<String>,

    /// Console mode
    #[arg(short, long, long_help = mode_help())]
    pub mode: Option<Mode>,

    /// Record type (normal, verbose, error, progress, or any label)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Record priority, 1 (low) to 5 (critical)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub priority: Option<u8>,

    /// Header label shown before the message
    #[arg(long)]
    pub header: Option<String>,

    /// Open a section before printing; repeat to nest
    #[arg(short, long = "section", value_name = "NAME")]
    pub sections: Vec<String>,

    /// When to show section names (onChange, firstLog, logOnly, always, never)
    #[arg(long)]
    pub show_sections: Option<ShowSections>,

    /// Prefix the record type
    #[arg(long)]
    pub show_types: bool,

    /// Hide the header label
    #[arg(long)]
    pub no_headers: bool,

    /// Do not indent by section depth
    #[arg(long)]
    pub no_indent: bool,

    /// Project directory holding .sconsole/config.toml
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Parse the message as a JSON value
    #[arg(long)]
    pub json: bool,
}

/// Long help for `--mode`: one line per mode with its description
pub fn mode_help() -> String {
    let mut help = String::from("Console mode:");
    for mode in Mode::ALL {
        help.push_str(&format!("\n  {:<10}{}", mode.name(), mode.description()));
    }
    help
}

impl Args {
    fn options(&self) -> LogOptions {
        LogOptions {
            priority: self.priority,
            kind: self.kind.clone(),
            header: self.header.clone(),
            args: None,
        }
    }

    fn payload(&self) -> Result<Value> {
        let text = self.message.join(" ");
        if self.json {
            let json: serde_json::Value = serde_json::from_str(&text)?;
            Ok(Value::from(json))
        } else {
            Ok(Value::Text(text))
        }
    }
}

/// Build a console from `args`, print the record, and return the console
pub fn run<W: Write>(args: &Args, sink: W) -> Result<ConsoleLogger<W>> {
    let settings = match &args.config {
        // An explicit directory must hold a readable config
        Some(dir) => try_load_settings(dir).context("Loading console settings")?,
        None => load_settings(&std::env::current_dir()?),
    };

    let mut console = ConsoleLogger::from_settings(&settings.console, sink);
    if let Some(mode) = args.mode {
        console.set_mode(mode);
    }
    if let Some(show) = args.show_sections {
        console.set_show_sections(show);
    }
    if args.show_types {
        console.set_show_types(true);
    }
    if args.no_headers {
        console.set_show_headers(false);
    }
    if args.no_indent {
        console.set_use_indented_sections(false);
    }

    let payload = args.payload()?;

    for section in &args.sections {
        console.start_section(section.as_str());
    }
    console.log_with(payload, args.options());
    for section in args.sections.iter().rev() {
        console.end_section(Some(section.as_str()));
    }

    debug!(
        "Printed record: {}",
        console.last_message().unwrap_or("<filtered>")
    );
    Ok(console)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sconsole").chain(argv.iter().copied())).unwrap()
    }

    fn printed(argv: &[&str]) -> String {
        let console = run(&parse(argv), Vec::new()).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_joins_message_words() {
        assert_eq!(printed(&["hello", "world"]), "hello\n");
    }

    #[test]
    fn test_low_priority_hidden_in_normal_mode() {
        assert_eq!(printed(&["-p", "1", "quiet"]), "");
        assert_eq!(printed(&["-m", "verbose", "-p", "1", "quiet"]), "quiet\n");
    }

    #[test]
    fn test_type_and_header() {
        assert_eq!(
            printed(&["--show-types", "-t", "error", "--header", "db", "down"]),
            " (db)  <error> down\n"
        );
        assert_eq!(
            printed(&["--no-headers", "--header", "db", "down"]),
            "down\n"
        );
    }

    #[test]
    fn test_nested_sections() {
        assert_eq!(
            printed(&["-s", "A", "-s", "B", "--show-sections", "never", "x"]),
            "\t\tx\n"
        );
        assert_eq!(
            printed(&["-s", "A", "--show-sections", "logOnly", "--no-indent", "x"]),
            "[A] x\n"
        );
    }

    #[test]
    fn test_json_payload() {
        assert_eq!(
            printed(&["--json", r#"{"a": 1, "b": {"c": 2}}"#]),
            "a: 1, b: { ... }, \n"
        );
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = run(&parse(&["--json", "{oops"]), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_priority_out_of_range_rejected() {
        assert!(Args::try_parse_from(["sconsole", "-p", "9", "x"]).is_err());
    }

    #[test]
    fn test_mode_help_lists_descriptions() {
        use clap::CommandFactory;

        let command = Args::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "mode")
            .unwrap();
        let help = arg.get_long_help().unwrap().to_string();
        for mode in Mode::ALL {
            assert!(help.contains(mode.name()), "missing {}", mode);
            assert!(help.contains(mode.description()), "missing {}", mode);
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Args::try_parse_from(["sconsole", "-m", "loud", "x"]).is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().to_str().unwrap();
        let err = run(&parse(&["-c", dir, "x"]), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_config_mode_applies() {
        let temp = tempfile::tempdir().unwrap();
        sconsole_app::config::init_config_dir(temp.path()).unwrap();
        std::fs::write(
            sconsole_app::config::config_path(temp.path()),
            "[console]\nmode = \"silent\"\n",
        )
        .unwrap();
        let dir = temp.path().to_str().unwrap();
        assert_eq!(printed(&["-c", dir, "x"]), "");
        assert_eq!(printed(&["-c", dir, "-m", "normal", "x"]), "x\n");
    }
}
