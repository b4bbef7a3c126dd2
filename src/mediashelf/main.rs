//! # mediashelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/mediashelf/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, prompts and dispatch (commands.rs)       │
//! │  - Terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, logging setup, confirmation prompts, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - **Commands and store**: unit tests next to the code, on `MemBackend`.
//! - **Filesystem backend**: `tests/fs_backend_test.rs`, on temporary directories.
//! - **CLI**: `tests/cli.rs` drives the real binary with `assert_cmd`, isolated
//!   through `MEDIASHELF_HOME`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
