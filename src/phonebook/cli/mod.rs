//! # CLI Layer
//!
//! This is **one possible UI client** for the phone book, not the application itself.
//! It is the only place that reads stdin, writes stdout, or installs logging.
//!
//! ## Structure
//!
//! - `setup.rs`: clap arguments and the tracing subscriber
//! - `shell.rs`: the interactive menu loop, generic over its I/O streams
//! - `render.rs`: menus and text for command results
//!
//! `run()` parses arguments, opens the store through [`phonebook::init`], and
//! hands stdin/stdout to the shell.

mod render;
mod setup;
mod shell;

use clap::Parser;
use phonebook::error::Result;
use phonebook::init::initialize;
use setup::{init_logging, Cli};
use shell::Shell;
use tracing::info;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = initialize(cli.file.as_deref(), cli.data_dir.as_deref())?;
    info!(contacts = %ctx.contacts_path.display(), "phone book opened");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(ctx.api, stdin.lock(), stdout.lock());
    shell.run()
}
