use crate::builtin;
use crate::command::CommandHandler;
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::io_adapters::LineSource;
use crate::lexer;
use crate::registry::CommandRegistry;
use anyhow::{Context, Result};
use std::io::Write;
use std::rc::Rc;

/// An interactive command session.
///
/// A shell owns its [`CommandRegistry`], pre-populated with the built-in `q`, `quit`,
/// `exit`, `help` and `?` commands, its display strings and a termination flag. Hosts
/// register their own commands, optionally adjust the greeting, prompt and farewell,
/// and then hand a [`LineSource`] and an output sink to [`Shell::run`].
///
/// Example
/// ```
/// use shell_toolkit::{ScriptSource, Shell};
///
/// let mut sh = Shell::new();
/// sh.set_greeting("hello");
/// sh.set_prompt("$ ");
///
/// let mut out = Vec::new();
/// sh.run(&mut ScriptSource::new(["frob", "exit"]), &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "hello\n$ Command \"frob\" not found!\n$ Goodbye\n"
/// );
/// assert!(sh.is_terminated());
/// ```
pub struct Shell {
    config: ShellConfig,
    terminated: bool,
    registry: CommandRegistry,
}

impl Shell {
    /// Create a shell with default display strings and the built-in commands.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create a shell with custom display strings and the built-in commands.
    pub fn with_config(config: ShellConfig) -> Self {
        let mut shell = Self {
            config,
            terminated: false,
            registry: CommandRegistry::new(),
        };
        builtin::install(&mut shell);
        shell
    }

    /// Register `handler` under `name` without usage text.
    ///
    /// An existing command with the same name, built-ins included, is replaced.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: CommandHandler + 'static,
    {
        self.register_with_usage(name, handler, "");
    }

    /// Register `handler` under `name` with the text `help` shows for it.
    pub fn register_with_usage<H>(
        &mut self,
        name: impl Into<String>,
        handler: H,
        usage: impl Into<String>,
    ) where
        H: CommandHandler + 'static,
    {
        self.registry.register(name, Rc::new(handler), usage);
    }

    /// Replace the usage text of a registered command, keeping its handler.
    pub fn set_usage(&mut self, name: &str, usage: impl Into<String>) -> Result<(), ShellError> {
        self.registry.set_usage(name, usage)
    }

    /// Read-only view of the registered commands.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Current display strings.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Replace the line printed when the loop starts.
    pub fn set_greeting(&mut self, greeting: impl Into<String>) {
        self.config.greeting = greeting.into();
    }

    /// Replace the text shown before each input line.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.config.prompt = prompt.into();
    }

    /// Replace the line printed when the loop ends.
    pub fn set_farewell(&mut self, farewell: impl Into<String>) {
        self.config.farewell = farewell.into();
    }

    /// Line printed when the loop starts.
    pub fn greeting(&self) -> &str {
        &self.config.greeting
    }

    /// Text shown before each input line.
    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    /// Line printed when the loop ends.
    pub fn farewell(&self) -> &str {
        &self.config.farewell
    }

    /// Ask the loop to stop once the current line has been dispatched.
    pub fn quit(&mut self) {
        self.terminated = true;
    }

    /// Whether a command has asked the loop to stop.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Usage text of `name`, or why there is none.
    pub fn usage(&self, name: &str) -> Result<&str, ShellError> {
        match self.registry.lookup(name) {
            Some(entry) if entry.has_usage() => Ok(entry.usage()),
            Some(_) => Err(ShellError::NoUsageAvailable(name.to_string())),
            None => Err(ShellError::UnknownHelpTarget(name.to_string())),
        }
    }

    /// Write `<name>: <usage>` for every command that has usage text, in name order.
    pub fn display_usage(&self, out: &mut dyn Write) -> Result<()> {
        for (name, usage) in self.registry.list_entries() {
            if !usage.is_empty() {
                writeln!(out, "{name}: {usage}")?;
            }
        }
        Ok(())
    }

    /// Write the usage line of a single command, or a diagnostic if there is none.
    pub fn display_command_usage(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        match self.usage(name) {
            Ok(usage) => writeln!(out, "{name}: {usage}")?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    /// Tokenize `line` and run the command named by its first token.
    ///
    /// Unknown commands and failing handlers are reported on `out`; the returned error
    /// only signals that `out` itself could not be written.
    pub fn dispatch(&mut self, line: &str, out: &mut dyn Write) -> Result<()> {
        let tokens = lexer::split_into_tokens(line);
        log::trace!("tokens = {tokens:?}");
        let name = &tokens[0];

        let Some(handler) = self.registry.lookup(name).map(|entry| entry.handler()) else {
            log::debug!("command {name:?} not found");
            writeln!(out, "{}", ShellError::UnknownCommand(name.clone()))?;
            return Ok(());
        };

        log::debug!("running {name:?} with {} token(s)", tokens.len());
        if let Err(err) = handler.invoke(self, &tokens, out) {
            log::debug!("command {name:?} failed: {err:#}");
            writeln!(out, "{err}")?;
        }
        Ok(())
    }

    /// Run the read-dispatch loop until a command quits or the input ends.
    ///
    /// The greeting is written first, then for each line the prompt is shown, the line
    /// read and dispatched. The termination flag is checked after each dispatch, so the
    /// line that quits is always run to completion. End of input, and any failure to
    /// read input, count as an implicit quit. The farewell is written last.
    ///
    /// Errors are returned only when `out` cannot be written.
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        self.terminated = false;
        log::info!("shell started with {} command(s)", self.registry.len());
        writeln!(out, "{}", self.config.greeting).context("can't write greeting")?;

        while !self.terminated {
            let line = match input.read_line(&self.config.prompt, out) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    log::info!("end of input");
                    self.quit();
                    break;
                }
                Err(err) => {
                    log::warn!("can't read input, ending session: {err:#}");
                    self.quit();
                    break;
                }
            };
            self.dispatch(&line, out)?;
        }

        writeln!(out, "{}", self.config.farewell).context("can't write farewell")?;
        out.flush().context("can't flush output")?;
        log::info!("shell stopped");
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
