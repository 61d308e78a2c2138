use crate::command::{CommandEntry, CommandHandler};
use crate::error::ShellError;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Name-ordered mapping from command name to its [`CommandEntry`].
///
/// Keys are unique; registering an existing name silently replaces the old entry.
/// Iteration always follows the sorted order of names, which is what `help` lists.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    entries: BTreeMap<String, CommandEntry>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the command `name`, replacing any previous entry with that name.
    ///
    /// An empty `usage` means no help is available for the command.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Rc<dyn CommandHandler>,
        usage: impl Into<String>,
    ) {
        let name = name.into();
        if self.entries.contains_key(&name) {
            log::debug!("replacing command {name:?}");
        }
        let entry = CommandEntry::new(name.clone(), handler, usage.into());
        self.entries.insert(name, entry);
    }

    /// Look up a command by its exact name.
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.get(name)
    }

    /// Whether a command named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Overwrite the usage text of an already registered command, keeping its handler.
    pub fn set_usage(&mut self, name: &str, usage: impl Into<String>) -> Result<(), ShellError> {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.set_usage(usage.into());
                Ok(())
            }
            None => Err(ShellError::UnknownCommand(name.to_string())),
        }
    }

    /// `(name, usage)` pairs in name order.
    ///
    /// The iterator is cheap to clone, so a listing can be restarted at will.
    pub fn list_entries(&self) -> impl Iterator<Item = (&str, &str)> + Clone {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.usage()))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
