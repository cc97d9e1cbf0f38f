//! Server Console - print messages through mode and section filtering
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use server_console::cli::{run, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Err(e) = server_console::logging::init() {
        eprintln!("sconsole: {}", e);
    }

    run(&args, std::io::stdout())?;
    Ok(())
}
