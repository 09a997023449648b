use std::{
    fmt::Display,
    io::{self, Write as _},
};

use indent_write::io::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::{
    command::{Command, CommandError, CommandSet},
    spec::{ArgKind, ArgSpec},
};

/// Total width that descriptions are wrapped to, before indentation
const WIDTH: usize = 72;

/// A short description of an argument's kind and constraints, like
/// `uint32 in [0, 10]` or `one of {fast | slow}`
pub fn kind_summary(kind: &ArgKind) -> impl Display + '_ {
    lazy_format! {
        match (kind) {
            ArgKind::Uint32 { min, max } => "uint32 in [{min}, {max}]",
            ArgKind::Uint64 { min, max } => "uint64 in [{min}, {max}]",
            ArgKind::Int { min, max } => "int in [{min}, {max}]",
            ArgKind::Float { min, max } => "float in [{min}, {max}]",
            ArgKind::Hex { min, max } => "hex in [{min:#x}, {max:#x}]",
            ArgKind::Bool => "bool (true/false, yes/no, 1/0)",
            ArgKind::String { options } => (
                "one of {{{options}}}",
                options = options.iter().join_with(" | ")
            ),
            ArgKind::Ip => "IPv4 address",
            ArgKind::IpMask => "IPv4 address with netmask",
            ArgKind::Custom { validator } => "custom ({validator})",
        }
    }
}

pub fn command_error<'a>(error: &'a CommandError<'_>) -> impl Display + 'a {
    lazy_format! {
        match (error) {
            CommandError::MissingCommand => "no command given",
            CommandError::UnknownCommand { command } => "unknown command {command:?}",
            CommandError::WrongArity { command, expected, got } => (
                "{command}: expected {expected} {noun}, got {got}",
                noun = if *expected == 1 { "argument" } else { "arguments" },
            ),
            CommandError::Argument { command, position, name, error } => (
                "{command}: argument {number} <{name}>: {error}",
                number = position + 1,
            ),
        }
    }
}

/// Print the wrapped `text`, one line at a time. Prints nothing at all if
/// `text` is empty.
fn print_wrapped(out: &mut (impl io::Write + ?Sized), text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    textwrap::wrap(text, WIDTH)
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))
}

/*
Overall structure:

DESCRIPTION

Usage:
  command <ARG> <ARG>

Arguments:
  <ARG>  uint32 in [0, 10]
      Description of ARG
 */
pub fn print_usage(out: &mut impl io::Write, command: &Command) -> io::Result<()> {
    print_wrapped(out, &command.description)?;

    section(out, "Usage", |mut out| {
        write!(out, "{}", command.name)?;
        command
            .args
            .iter()
            .try_for_each(|spec| write!(out, " <{}>", spec.name))?;
        writeln!(out)
    })?;

    maybe_section(out, "Arguments", &command.args, |out, spec| {
        print_argument(out, spec)
    })
}

/// Print a list of commands, with their descriptions aligned
pub fn print_commands(out: &mut impl io::Write, commands: &CommandSet) -> io::Result<()> {
    let width = commands
        .names()
        .map(str::len)
        .max()
        .unwrap_or(0);

    maybe_section(out, "Commands", commands, |out, command| {
        match command.description.lines().next() {
            None => writeln!(out, "{}", command.name),
            Some(summary) => writeln!(out, "{:width$}  {summary}", command.name),
        }
    })
}

fn print_argument(out: &mut (impl io::Write + ?Sized), spec: &ArgSpec) -> io::Result<()> {
    writeln!(out, "<{}>  {}", spec.name, kind_summary(&spec.kind))?;
    print_wrapped(&mut IndentWriter::new("    ", out), &spec.description)
}

/// Write a section by writing a newline, then the `header`, then an
/// indented `body`.
fn section<O: io::Write + ?Sized, T>(
    out: &mut O,
    header: &str,
    body: impl FnOnce(IndentWriter<&mut O>) -> io::Result<T>,
) -> io::Result<T> {
    writeln!(out, "\n{header}:")?;
    body(IndentWriter::new("  ", out))
}

/// Write an optional section, only if the iterator is not empty.
/// Otherwise identical to `section`.
fn maybe_section<O: io::Write + ?Sized, I: IntoIterator>(
    out: &mut O,
    header: &str,
    items: I,
    body: impl Fn(&mut IndentWriter<&mut O>, I::Item) -> io::Result<()>,
) -> io::Result<()> {
    let mut items = items.into_iter();

    match items.next() {
        None => Ok(()),
        Some(first) => section(out, header, |mut out| {
            body(&mut out, first)?;
            items.try_for_each(|item| body(&mut out, item))
        }),
    }
}
