//! # Mediashelf Architecture
//!
//! Mediashelf is a **UI-agnostic cataloging library** for three kinds of media:
//! movies, series and books. It ships with a CLI client, but the CLI is just one
//! way to drive it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, prompts for confirms   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the storage backend                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, generic over the record kind             │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore<T, B>: load-or-seed, upsert, delete, lookup  │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Store, Three Kinds
//!
//! Every kind of record (see [`model`]) has the same shape: a numeric `id`, a
//! `title`, a year, a rating, genre tags and a few kind-specific fields. The
//! [`model::Record`] trait captures that shape so [`store::RecordStore`] and
//! [`filter::FilterableCollection`] are written once and instantiated per kind.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never writes to stdout, never exits the process and never reads stdin.
//! Confirmation prompts are modelled by [`confirm::ConfirmationGate`]; the CLI
//! decides how to ask the user.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage backends and the generic record store
//! - [`model`]: Record types, kinds and genre vocabularies
//! - [`draft`]: Partial field values and their form-level constraints
//! - [`filter`]: Title search and genre filtering
//! - [`confirm`]: Single-slot confirmation broker
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod draft;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod store;
