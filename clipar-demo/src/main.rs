mod config;
mod validators;

use std::{
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use clipar::{
    command::{CommandError, CommandSet},
    printers::{print_commands, print_usage},
};
use lazy_format::lazy_format;
use tracing_subscriber::EnvFilter;

/// Validate a command line against a table of commands
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// The TOML command table
    #[arg(short, long, default_value = "commands.toml")]
    config: PathBuf,

    /// Log validation details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// List the commands in the table and exit
    #[arg(short, long)]
    list: bool,

    /// Print the usage message for a command and exit
    #[arg(short, long, value_name = "COMMAND")]
    usage: Option<String>,

    /// A command name, followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    line: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("clipar=debug,clipar_demo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// After a failed invocation, show whatever would help fix it: the usage of
/// the command, or the list of commands if there wasn't a usable one.
fn print_help_for(
    out: &mut impl io::Write,
    error: &CommandError<'_>,
    commands: &CommandSet,
) -> io::Result<()> {
    let command = match error {
        CommandError::WrongArity { command, .. } | CommandError::Argument { command, .. } => {
            commands.get(command)
        }
        _ => None,
    };

    match command {
        Some(command) => print_usage(out, command),
        None => print_commands(out, commands),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Arguments::parse();
    init_tracing(args.verbose);

    let commands = config::load(&args.config)?;
    let validators = validators::builtin();
    let mut stdout = io::stdout().lock();

    if args.list {
        print_commands(&mut stdout, &commands)?;
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(name) = &args.usage {
        let command = commands
            .get(name)
            .with_context(|| format!("there's no command named {name:?}"))?;

        print_usage(&mut stdout, command)?;
        return Ok(ExitCode::SUCCESS);
    }

    let line: Vec<&str> = args.line.iter().map(String::as_str).collect();

    match commands.dispatch(&line, &validators) {
        Ok((command, values)) => {
            tracing::info!(command = %command.name, "valid invocation");

            command.args.iter().zip(&values).try_for_each(|(spec, value)| {
                writeln!(stdout, "{}", lazy_format!("{} = {value}", spec.name))
            })?;

            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "error: {error}")?;
            print_help_for(&mut stderr, &error, &commands)?;

            Ok(ExitCode::from(2))
        }
    }
}
