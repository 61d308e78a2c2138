/// Display strings of a shell session.
///
/// The session holds one of these and exposes setters for each field, so a host can
/// either build a config up front and pass it to [`Shell::with_config`] or tweak the
/// defaults later, even from inside a running command.
///
/// Fields are public to keep construction with struct-update syntax short.
///
/// [`Shell::with_config`]: crate::Shell::with_config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Printed once, on its own line, when the loop starts.
    pub greeting: String,
    /// Printed before every line read, without a trailing newline.
    pub prompt: String,
    /// Printed once, on its own line, after the loop ends.
    pub farewell: String,
}

/// Greeting used when none is configured.
pub const DEFAULT_GREETING: &str = "Welcome. Enter 'q','exit',or 'quit' to quit";
/// Prompt used when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";
/// Farewell used when none is configured.
pub const DEFAULT_FAREWELL: &str = "Goodbye";

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            farewell: DEFAULT_FAREWELL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.greeting, "Welcome. Enter 'q','exit',or 'quit' to quit");
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.farewell, "Goodbye");
    }

    #[test]
    fn test_struct_update_keeps_other_defaults() {
        let config = ShellConfig {
            prompt: "$ ".into(),
            ..Default::default()
        };
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.farewell, DEFAULT_FAREWELL);
    }
}
