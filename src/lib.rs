//! A tiny, embeddable command shell.
//!
//! This crate provides the building blocks for a line-oriented command prompt that a
//! host application can embed: a registry of named commands, a tokenizer, and a
//! read-dispatch loop with built-in `quit`/`exit`/`q` and `help`/`?` commands.
//!
//! The main entry point is [`Shell`]. Commands are anything implementing
//! [`CommandHandler`], which includes plain closures. Input lines come from a
//! [`LineSource`]; output goes to any [`std::io::Write`] sink.
//!
//! ```
//! use shell_toolkit::{ScriptSource, Shell};
//! use std::io::Write;
//!
//! let mut sh = Shell::new();
//! sh.register_with_usage(
//!     "greet",
//!     |_: &mut Shell, _: &[String], out: &mut dyn Write| -> anyhow::Result<()> {
//!         writeln!(out, "hi")?;
//!         Ok(())
//!     },
//!     "prints hi",
//! );
//!
//! let mut out = Vec::new();
//! sh.run(&mut ScriptSource::new(["greet", "quit"]), &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Welcome. Enter 'q','exit',or 'quit' to quit\n> hi\n> Goodbye\n"
//! );
//! ```

mod builtin;
pub mod command;
pub mod config;
pub mod error;
pub mod io_adapters;
pub mod lexer;
pub mod registry;
mod shell;

pub use command::{CommandEntry, CommandHandler};
pub use config::ShellConfig;
pub use error::ShellError;
pub use io_adapters::{EditorSource, LineSource, ReaderSource, ScriptSource};
pub use registry::CommandRegistry;
/// Just a convenient re-export of the interactive session.
///
/// See [`Shell`] for the high-level API.
pub use shell::Shell;
