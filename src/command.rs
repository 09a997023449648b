/*!
Commands: a name and an ordered list of positional [`ArgSpec`]s.

Validating an invocation checks that it has exactly the right number of
arguments, then parses each one in order. The first argument that fails to
parse aborts the whole invocation; there's no fallback to a default value.
*/

use std::{
    fmt::{self, Display},
    string::String,
    vec::Vec,
};

use crate::{
    error::ParameterError,
    printers,
    spec::{ArgSpec, ArgValue, Validators},
};

/// A single command and its positional arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSpec>,
}

/// Errors that occur while validating a command invocation
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CommandError<'arg> {
    /// There was no command name at all
    MissingCommand,

    /// The command name didn't match any known command
    UnknownCommand { command: &'arg str },

    /// The command got too many or too few arguments
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },

    /// One of the arguments failed to parse
    Argument {
        command: String,

        /// The zero-based position of the argument
        position: usize,

        /// The name of the argument
        name: String,
        error: ParameterError<'arg>,
    },
}

impl Display for CommandError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printers::command_error(self))
    }
}

impl core::error::Error for CommandError<'_> {}

impl Command {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument to the end of this command's argument list
    #[must_use]
    pub fn arg(mut self, spec: ArgSpec) -> Self {
        self.args.push(spec);
        self
    }

    /// Parse and validate the arguments to this command (not including the
    /// command name itself).
    pub fn validate<'arg>(
        &self,
        args: &[&'arg str],
        validators: &Validators,
    ) -> Result<Vec<ArgValue>, CommandError<'arg>> {
        if args.len() != self.args.len() {
            tracing::debug!(
                command = %self.name,
                expected = self.args.len(),
                got = args.len(),
                "wrong number of arguments",
            );

            return Err(CommandError::WrongArity {
                command: self.name.clone(),
                expected: self.args.len(),
                got: args.len(),
            });
        }

        self.args
            .iter()
            .zip(args)
            .enumerate()
            .map(|(position, (spec, &arg))| {
                spec.parse(arg, validators).map_err(|error: ParameterError<'arg>| {
                    tracing::debug!(
                        command = %self.name,
                        argument = %spec.name,
                        position,
                        %error,
                        "argument failed validation",
                    );

                    CommandError::Argument {
                        command: self.name.clone(),
                        position,
                        name: spec.name.clone(),
                        error,
                    }
                })
            })
            .collect()
    }
}

/// An ordered collection of commands with distinct names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandSet {
    commands: Vec<Command>,
}

impl CommandSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command. If there's already a command with the same name, it's
    /// replaced (keeping its position), and the old command is returned.
    pub fn insert(&mut self, command: Command) -> Option<Command> {
        match self
            .commands
            .iter_mut()
            .find(|existing| existing.name == command.name)
        {
            Some(existing) => Some(core::mem::replace(existing, command)),
            None => {
                self.commands.push(command);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look up the command named by the first word of `line`, then validate
    /// the rest of `line` as its arguments.
    pub fn dispatch<'arg>(
        &self,
        line: &[&'arg str],
        validators: &Validators,
    ) -> Result<(&Command, Vec<ArgValue>), CommandError<'arg>> {
        let (&name, args) = line.split_first().ok_or(CommandError::MissingCommand)?;

        let command = self.get(name).ok_or_else(|| {
            tracing::debug!(command = name, "unknown command");
            CommandError::UnknownCommand { command: name }
        })?;

        tracing::trace!(command = name, args = args.len(), "dispatching");

        command
            .validate(args, validators)
            .map(|values| (command, values))
    }

    /// The names of every command, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|command| command.name.as_str())
    }
}

impl FromIterator<Command> for CommandSet {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|command| {
            set.insert(command);
        });
        set
    }
}

impl Extend<Command> for CommandSet {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        iter.into_iter().for_each(|command| {
            self.insert(command);
        });
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a Command;
    type IntoIter = core::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
