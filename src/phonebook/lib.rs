//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contact library** with a small interactive shell
//! on top. The shell asks questions and prints answers; everything it does is a
//! call into this library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Menu loop, prompts, rendering                            │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, add, delete, search, edit, age                     │
//! │  - Raw input in, CmdResult or PhonebookError out            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: get/put/remove/rename/list              │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! A contact is keyed by its [`model::Identifier`], the capitalized
//! `"Name Surname"` pair. Renaming a contact moves its record to a new key.
//!
//! ## Errors
//!
//! Validation failures, missing contacts and key collisions are ordinary
//! [`error::PhonebookError`] values that the shell reports before showing the
//! menu again. Storage failures on save are fatal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Identifier`, `Record`, `Contact`
//! - [`validation`]: Field validators
//! - [`config`]: Configuration file
//! - [`init`]: Data directory resolution and store wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
