// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal front end for Chain Reaction.
//!
//! The binary in `main.rs` only wires stdin and signals; everything it drives
//! lives here so it can be tested without a terminal.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{parse_command, Command};
pub use config::CliConfig;
pub use session::{Flow, Session};
