//! Console front end for the maze heroes game.
//!
//! The binary in `main.rs` is the composition root: it reads the environment,
//! installs file logging, loads content, asks for the hero roster and then
//! hands the session a [`Console`] for input and a [`ConsoleReporter`] for
//! output.

pub mod config;
pub mod console;
pub mod logging;
pub mod presentation;

pub use config::ClientConfig;
pub use console::Console;
pub use presentation::ConsoleReporter;
