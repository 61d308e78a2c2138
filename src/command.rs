use crate::shell::Shell;
use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

/// Object-safe trait for anything that can be bound to a command name.
///
/// A blanket implementation exists for closures and functions with the matching
/// signature, so most hosts never implement this by hand. Types that need to carry
/// state between invocations can implement it directly and keep that state behind
/// interior mutability.
pub trait CommandHandler {
    /// Invokes the command.
    ///
    /// `args` holds every token of the input line, including the command name at
    /// index 0, so `args.len()` is the token count. The handler may write to `out`
    /// and may call back into `shell` to change its configuration, register other
    /// commands or request termination via [`Shell::quit`].
    ///
    /// An error is reported on `out` by the shell and does not stop the loop.
    fn invoke(&self, shell: &mut Shell, args: &[String], out: &mut dyn Write) -> Result<()>;
}

impl<F> CommandHandler for F
where
    F: Fn(&mut Shell, &[String], &mut dyn Write) -> Result<()>,
{
    fn invoke(&self, shell: &mut Shell, args: &[String], out: &mut dyn Write) -> Result<()> {
        self(shell, args, out)
    }
}

/// A registered command: its name, handler and usage text.
#[derive(Clone)]
pub struct CommandEntry {
    name: String,
    handler: Rc<dyn CommandHandler>,
    usage: String,
}

impl CommandEntry {
    pub(crate) fn new(name: String, handler: Rc<dyn CommandHandler>, usage: String) -> Self {
        Self {
            name,
            handler,
            usage,
        }
    }

    /// Name the command is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Usage text; empty when no help is available.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Whether `help` has anything to show for this command.
    pub fn has_usage(&self) -> bool {
        !self.usage.is_empty()
    }

    /// Shared handle to the handler, detached from the registry borrow.
    pub fn handler(&self) -> Rc<dyn CommandHandler> {
        Rc::clone(&self.handler)
    }

    pub(crate) fn set_usage(&mut self, usage: String) {
        self.usage = usage;
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}
