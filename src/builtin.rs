use crate::command::CommandHandler;
use crate::shell::Shell;
use anyhow::Result;
use std::io::Write;
use std::rc::Rc;

/// Names bound to the quit command.
pub(crate) const QUIT_NAMES: [&str; 3] = ["q", "quit", "exit"];
/// Names bound to the help command.
pub(crate) const HELP_NAMES: [&str; 2] = ["help", "?"];

/// Ends the session after the current line. Arguments are ignored.
fn quit(shell: &mut Shell, _args: &[String], _out: &mut dyn Write) -> Result<()> {
    shell.quit();
    Ok(())
}

/// `help` lists every documented command, `help <name>` shows one of them.
fn help(shell: &mut Shell, args: &[String], out: &mut dyn Write) -> Result<()> {
    match args.get(1) {
        Some(name) => shell.display_command_usage(name, out),
        None => shell.display_usage(out),
    }
}

/// Register the built-in commands, without usage text.
pub(crate) fn install(shell: &mut Shell) {
    let quit_handler: Rc<dyn CommandHandler> = Rc::new(quit);
    let help_handler: Rc<dyn CommandHandler> = Rc::new(help);
    for name in QUIT_NAMES {
        shell.registry_mut().register(name, Rc::clone(&quit_handler), "");
    }
    for name in HELP_NAMES {
        shell.registry_mut().register(name, Rc::clone(&help_handler), "");
    }
}
