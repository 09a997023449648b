use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clipar::{
    command::{Command, CommandSet},
    lexical::iequals,
    spec::{ArgRecord, ArgSpec, SpecError},
};
use serde::Deserialize;

/// A table of commands, as written in a TOML file:
///
/// ```toml
/// [[command]]
/// name = "set_speed"
/// description = "Set the fan speed"
///
/// [[command.arg]]
/// name = "fan"
/// kind = "uint32"
/// min = 0
/// max = 3
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, rename = "command")]
    pub commands: Vec<CommandConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "arg")]
    pub args: Vec<ArgConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub kind: String,
    pub min: Option<Bound>,
    pub max: Option<Bound>,

    /// Comma separated, like `"fast, slow"`
    pub options: Option<String>,
    pub validator: Option<String>,
}

/// A numeric bound. TOML integers can't hold the whole `uint64` range, and
/// hex bounds read better as `"0xff"`, so bounds may also be strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Bound {
    /// Render the bound as the text that the argument's own parser reads.
    /// Integers given to a `hex` argument are written in hex, so that
    /// `max = 255` means 255 rather than 0x255. Negative integers keep their
    /// sign, which the hex parser rejects.
    fn to_record_text(&self, kind: &str) -> String {
        match self {
            Bound::Integer(value) if iequals(kind.trim(), "hex") => match *value < 0 {
                true => format!("-{:#x}", value.unsigned_abs()),
                false => format!("{value:#x}"),
            },
            Bound::Integer(value) => value.to_string(),
            Bound::Float(value) => value.to_string(),
            Bound::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't read {path}", path = .path.display())]
    Read {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    #[error("couldn't parse the command table")]
    Parse(#[from] toml::de::Error),

    #[error("command {command:?} has an invalid argument")]
    Argument {
        command: String,

        #[source]
        source: SpecError,
    },

    #[error("command {0:?} is defined more than once")]
    Duplicate(String),
}

impl ArgConfig {
    fn to_spec(&self) -> Result<ArgSpec, SpecError> {
        let min = self.min.as_ref().map(|bound| bound.to_record_text(&self.kind));
        let max = self.max.as_ref().map(|bound| bound.to_record_text(&self.kind));

        ArgSpec::from_record(&ArgRecord {
            name: &self.name,
            description: &self.description,
            kind: &self.kind,
            min: min.as_deref(),
            max: max.as_deref(),
            options: self.options.as_deref(),
            validator: self.validator.as_deref(),
        })
    }
}

impl CommandConfig {
    fn to_command(&self) -> Result<Command, ConfigError> {
        self.args
            .iter()
            .try_fold(
                Command::new(&self.name, &self.description),
                |command, arg| arg.to_spec().map(|spec| command.arg(spec)),
            )
            .map_err(|source| ConfigError::Argument {
                command: self.name.clone(),
                source,
            })
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the command set. Every argument record is checked here, so a
    /// bad table is reported before any command line is validated.
    pub fn commands(&self) -> Result<CommandSet, ConfigError> {
        let mut commands = CommandSet::new();

        for config in &self.commands {
            if commands.insert(config.to_command()?).is_some() {
                return Err(ConfigError::Duplicate(config.name.clone()));
            }
        }

        Ok(commands)
    }
}

/// Read and build the command table at `path`
pub fn load(path: &Path) -> Result<CommandSet, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;

    let commands = Config::from_toml(&text)?.commands()?;
    tracing::debug!(path = %path.display(), commands = commands.len(), "loaded command table");

    Ok(commands)
}
