//! Splitting of input lines into command tokens.
//!
//! The policy is deliberately literal: a line is cut at every ASCII space and nothing
//! else. Tabs are ordinary characters, quotes have no meaning, and two spaces in a row
//! yield an empty token between them. A space at the end of the line closes the last
//! token instead of opening a new one. A stricter whitespace-collapsing tokenizer would
//! change what handlers see, so it is not the default.

/// The character lines are split on.
pub const DELIMITER: char = ' ';

/// Split `line` into tokens at every [`DELIMITER`].
///
/// A trailing delimiter terminates the last token rather than starting an empty one.
/// The result is never empty: the empty line, like a lone space, yields a single empty
/// token. The first token is the command name; the rest are passed to the handler
/// verbatim.
///
/// ```
/// use shell_toolkit::lexer::split_into_tokens;
/// assert_eq!(split_into_tokens("a  b"), vec!["a", "", "b"]);
/// assert_eq!(split_into_tokens("help "), vec!["help"]);
/// ```
pub fn split_into_tokens(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = line
        .split_terminator(DELIMITER)
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        tokens.push(String::new());
    }
    tokens
}
