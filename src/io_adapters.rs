use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Where the shell gets its input lines from.
///
/// The source is also in charge of showing the prompt, because an interactive line
/// editor has to draw the prompt itself while plain readers just print it.
pub trait LineSource {
    /// Show `prompt` and read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>>;
}

fn show_prompt(prompt: &str, out: &mut dyn Write) -> Result<()> {
    out.write_all(prompt.as_bytes())
        .context("can't write prompt")?;
    out.flush().context("can't flush prompt")?;
    Ok(())
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
}

/// Line source over any buffered reader: locked stdin, a file, a `Cursor`.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Create a source reading lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Give back the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        show_prompt(prompt, out)?;
        let mut line = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut line)
            .context("can't read input line")?;
        if read == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut line);
        // Invalid UTF-8 is replaced, not fatal.
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// Memory-backed line source, handy for scripted sessions and tests.
#[derive(Debug, Default, Clone)]
pub struct ScriptSource {
    lines: VecDeque<String>,
}

impl ScriptSource {
    /// Create a source that yields `lines` in order and then reports end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        show_prompt(prompt, out)?;
        Ok(self.lines.pop_front())
    }
}

/// Interactive line source backed by a `rustyline` editor.
///
/// Lines are not added to the editor history. Ctrl-C is treated like Ctrl-D and ends
/// the input.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// Create a source on a fresh line editor attached to the terminal.
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("can't initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => {
                log::info!("interrupted, ending input");
                Ok(None)
            }
            Err(err) => Err(err).context("line editor failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_source_strips_line_endings() {
        let mut src = ReaderSource::new(Cursor::new("one\r\ntwo\nthree"));
        let mut out = Vec::new();

        assert_eq!(src.read_line("> ", &mut out).unwrap().as_deref(), Some("one"));
        assert_eq!(src.read_line("> ", &mut out).unwrap().as_deref(), Some("two"));
        assert_eq!(src.read_line("> ", &mut out).unwrap().as_deref(), Some("three"));
        assert_eq!(src.read_line("> ", &mut out).unwrap(), None);

        assert_eq!(String::from_utf8(out).unwrap(), "> > > > ");
    }

    #[test]
    fn test_reader_source_keeps_inner_spaces() {
        let mut src = ReaderSource::new(Cursor::new("a  b \n"));
        let mut out = Vec::new();
        assert_eq!(src.read_line("", &mut out).unwrap().as_deref(), Some("a  b "));
    }

    #[test]
    fn test_reader_source_replaces_invalid_utf8() {
        let mut src = ReaderSource::new(Cursor::new(b"ec\xffho\nquit\n".to_vec()));
        let mut out = Vec::new();

        assert_eq!(
            src.read_line("", &mut out).unwrap().as_deref(),
            Some("ec\u{FFFD}ho")
        );
        assert_eq!(src.read_line("", &mut out).unwrap().as_deref(), Some("quit"));
    }

    #[test]
    fn test_reader_source_blank_line_is_not_end_of_input() {
        let mut src = ReaderSource::new(Cursor::new("\n"));
        let mut out = Vec::new();
        assert_eq!(src.read_line("", &mut out).unwrap().as_deref(), Some(""));
        assert_eq!(src.read_line("", &mut out).unwrap(), None);
    }

    #[test]
    fn test_script_source_yields_in_order() {
        let mut src = ScriptSource::new(["first", "second"]);
        let mut out = Vec::new();

        assert_eq!(src.remaining(), 2);
        assert_eq!(src.read_line("$ ", &mut out).unwrap().as_deref(), Some("first"));
        assert_eq!(src.read_line("$ ", &mut out).unwrap().as_deref(), Some("second"));
        assert_eq!(src.read_line("$ ", &mut out).unwrap(), None);
        assert_eq!(src.remaining(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "$ $ $ ");
    }
}
