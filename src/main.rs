use anyhow::{Context, Result};
use argh::FromArgs;
use shell_toolkit::{EditorSource, LineSource, ReaderSource, Shell, ShellConfig};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Small demo of an embedded command shell.
struct Args {
    #[argh(option)]
    /// line printed once when the shell starts.
    greeting: Option<String>,

    #[argh(option)]
    /// text shown before every input line.
    prompt: Option<String>,

    #[argh(option)]
    /// line printed once when the shell ends.
    farewell: Option<String>,

    #[argh(option)]
    /// read commands from this file instead of the terminal.
    script: Option<PathBuf>,

    #[argh(switch)]
    /// read plain lines from standard input, without the line editor.
    plain: bool,
}

impl Args {
    fn config(&self) -> ShellConfig {
        let defaults = ShellConfig::default();
        ShellConfig {
            greeting: self.greeting.clone().unwrap_or(defaults.greeting),
            prompt: self.prompt.clone().unwrap_or(defaults.prompt),
            farewell: self.farewell.clone().unwrap_or(defaults.farewell),
        }
    }
}

fn echo(_: &mut Shell, args: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", args[1..].join(" "))?;
    Ok(())
}

fn set_prompt(shell: &mut Shell, args: &[String], _: &mut dyn Write) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("prompt: missing prompt text");
    }
    shell.set_prompt(format!("{} ", args[1..].join(" ")));
    Ok(())
}

fn build_shell(config: ShellConfig) -> Result<Shell> {
    let mut sh = Shell::with_config(config);
    sh.register_with_usage("echo", echo, "echo <words...>: print the words back");
    sh.register_with_usage("prompt", set_prompt, "prompt <text>: change the prompt");
    for name in ["q", "quit", "exit"] {
        sh.set_usage(name, "leave the shell")?;
    }
    for name in ["help", "?"] {
        sh.set_usage(name, "help [command]: list commands or describe one")?;
    }
    Ok(sh)
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();
    let mut sh = build_shell(args.config())?;

    let mut input: Box<dyn LineSource> = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can't open script {}", path.display()))?;
            Box::new(ReaderSource::new(BufReader::new(file)))
        }
        None if args.plain => Box::new(ReaderSource::new(io::stdin().lock())),
        None => Box::new(EditorSource::new()?),
    };

    let mut stdout = io::stdout().lock();
    sh.run(input.as_mut(), &mut stdout)
}
