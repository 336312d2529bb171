//! # Phonebook CLI
//!
//! The binary is intentionally thin: the interactive shell lives in `cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The shell is responsible
//! for **all** user-facing concerns: argument parsing, prompting, rendering
//! and deciding which errors end the session.
//!
//! ## Testing Approach
//!
//! - **Commands layer (`commands/`)**: unit tests of the business logic against
//!   `InMemoryStore`.
//! - **Shell (`cli/shell.rs`)**: scripted input through a `Cursor`, output
//!   captured in a `Vec<u8>`.
//! - **End to end (`tests/`)**: the built binary driven over stdin with
//!   `assert_cmd`, backed by a temporary contacts file.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
