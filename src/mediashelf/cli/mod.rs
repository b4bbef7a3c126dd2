//! # CLI Behavior
//!
//! This is **one possible UI client** for mediashelf, not the application
//! itself. For the overall architecture, see the library documentation.
//!
//! ## Naked Execution (`mediashelf`)
//!
//! Running `mediashelf` with no subcommand prints the overview: one line per
//! collection with its size and average rating.
//!
//! ## Collections
//!
//! `mediashelf <kind> <action>` where `<kind>` is `movies`, `series` or
//! `books` (singular forms work too). Without an action, `list` is assumed.
//!
//! ## Destructive Actions
//!
//! `delete` and `reset` go through a [`ConfirmationGate`]. The gate is opened
//! with the action and its options, the user is prompted on stdin, and the
//! action runs only on an explicit yes. `-y` skips the prompt, as does
//! setting `confirm-deletes` to `false`.
//!
//! [`ConfirmationGate`]: mediashelf::confirm::ConfirmationGate
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from
//! `MEDIASHELF_LOG`, else the `log-filter` setting; `-v` forces `debug`.

mod commands;
mod print;
pub mod setup;

pub use commands::run;
