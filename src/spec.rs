/*!
Argument specifications: the description of one positional argument (its
name, what it's for, and how to parse it) and the typed values they produce.

Specifications usually come from somewhere outside of the program, as plain
text records (see [`ArgRecord`]); [`ArgSpec::from_record`] turns those into
typed [`ArgSpec`]s.
*/

use std::{
    borrow::ToOwned,
    boxed::Box,
    collections::BTreeMap,
    fmt::{self, Display},
    string::{String, ToString},
    vec::Vec,
};

use core::net::Ipv4Addr;

use lazy_format::lazy_format;

use crate::{
    choice::{parse_bool, parse_string_option},
    custom::parse_custom,
    error::{Error, ParameterError},
    ipv4::{Ipv4Net, parse_ipv4, parse_ipv4_with_netmask},
    lexical::iequals,
    numeric::{
        parse_float_in_range, parse_hex_in_range, parse_int_in_range, parse_uint32_in_range,
        parse_uint64_in_range,
    },
};

/// How an argument is parsed, along with its admissible range or options
#[derive(Debug, Clone, PartialEq)]
pub enum ArgKind {
    Uint32 { min: u32, max: u32 },
    Uint64 { min: u64, max: u64 },
    Int { min: i32, max: i32 },
    Float { min: f32, max: f32 },
    Hex { min: u64, max: u64 },
    Bool,
    String { options: Vec<String> },
    Ip,
    IpMask,

    /// Parsed by the [`Validators`] entry with this name
    Custom { validator: String },
}

impl ArgKind {
    /// The name of this kind, as it appears in an [`ArgRecord`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match *self {
            ArgKind::Uint32 { .. } => "uint32",
            ArgKind::Uint64 { .. } => "uint64",
            ArgKind::Int { .. } => "int",
            ArgKind::Float { .. } => "float",
            ArgKind::Hex { .. } => "hex",
            ArgKind::Bool => "bool",
            ArgKind::String { .. } => "string",
            ArgKind::Ip => "ip",
            ArgKind::IpMask => "ip_mask",
            ArgKind::Custom { .. } => "custom",
        }
    }
}

/// A successfully parsed argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Uint32(u32),
    Uint64(u64),
    Int(i32),
    Float(f32),
    Hex(u64),
    Bool(bool),

    /// The matching option, and its position in the option list
    Choice { index: usize, value: String },
    Ip(Ipv4Addr),
    IpMask(Ipv4Net),

    /// The value produced by a custom validator
    Custom(String),
}

impl Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Uint32(value) => write!(f, "{value}"),
            ArgValue::Uint64(value) => write!(f, "{value}"),
            ArgValue::Int(value) => write!(f, "{value}"),
            ArgValue::Float(value) => write!(f, "{value}"),
            ArgValue::Hex(value) => write!(f, "{value:#x}"),
            ArgValue::Bool(value) => write!(f, "{value}"),
            ArgValue::Choice { value, .. } => write!(f, "{value}"),
            ArgValue::Ip(address) => write!(f, "{address}"),
            ArgValue::IpMask(net) => write!(f, "{net}"),
            ArgValue::Custom(value) => write!(f, "{value}"),
        }
    }
}

/// A custom validator that can be stored in [`Validators`]
pub type BoxedValidator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A registry of named custom validators, for [`ArgKind::Custom`] arguments
#[derive(Default)]
pub struct Validators {
    validators: BTreeMap<String, BoxedValidator>,
}

impl Validators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator under `name`, replacing any existing validator
    /// with that name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        validator: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> &mut Self {
        self.validators.insert(name.into(), Box::new(validator));
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&(dyn Fn(&str) -> Option<String> + Send + Sync)> {
        self.validators.get(name).map(|validator| &**validator)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

/// The specification of a single positional argument
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    pub name: String,
    pub description: String,
    pub kind: ArgKind,
}

/**
An argument specification as plain text, the way it arrives from outside
the program (a form, a config file). `min`, `max`, `options` and
`validator` are only meaningful for some kinds and are ignored by the rest.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgRecord<'a> {
    pub name: &'a str,
    pub description: &'a str,

    /// One of `uint32`, `uint64`, `int`, `float`, `hex`, `bool`, `string`,
    /// `ip`, `ip_mask`, `custom`; case insensitive.
    pub kind: &'a str,

    /// Lower bound for numeric kinds. Defaults to the smallest value.
    pub min: Option<&'a str>,

    /// Upper bound for numeric kinds. Defaults to the largest value.
    pub max: Option<&'a str>,

    /// Comma separated options, for `string`
    pub options: Option<&'a str>,

    /// Validator name, for `custom`
    pub validator: Option<&'a str>,
}

/// Errors converting an [`ArgRecord`] into an [`ArgSpec`]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SpecError {
    /// The kind isn't one of the known kinds
    UnknownKind { name: String, kind: String },

    /// A `min` or `max` bound couldn't be parsed as the argument's type
    InvalidBound {
        name: String,
        bound: &'static str,
        message: String,
    },

    /// A `string` argument didn't list any options
    MissingOptions { name: String },

    /// A `custom` argument didn't name a validator
    MissingValidator { name: String },
}

impl Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::UnknownKind { name, kind } => {
                write!(f, "argument {name:?} has unknown kind {kind:?}")
            }
            SpecError::InvalidBound {
                name,
                bound,
                message,
            } => write!(f, "argument {name:?} has an invalid {bound}: {message}"),
            SpecError::MissingOptions { name } => {
                write!(f, "string argument {name:?} has no options")
            }
            SpecError::MissingValidator { name } => {
                write!(f, "custom argument {name:?} doesn't name a validator")
            }
        }
    }
}

impl core::error::Error for SpecError {}

/// Parse an optional bound, falling back to `default` when it's absent
fn bound<T>(
    name: &str,
    bound: &'static str,
    text: Option<&str>,
    default: T,
    parse: for<'a> fn(&'a str) -> Result<T, ParameterError<'a>>,
) -> Result<T, SpecError> {
    match text.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => parse(text).map_err(|error| SpecError::InvalidBound {
            name: name.to_owned(),
            bound,
            message: error.to_string(),
        }),
    }
}

fn any_u32(text: &str) -> Result<u32, ParameterError<'_>> {
    parse_uint32_in_range(text, u32::MIN, u32::MAX)
}

fn any_u64(text: &str) -> Result<u64, ParameterError<'_>> {
    parse_uint64_in_range(text, u64::MIN, u64::MAX)
}

fn any_i32(text: &str) -> Result<i32, ParameterError<'_>> {
    parse_int_in_range(text, i32::MIN, i32::MAX)
}

fn any_f32(text: &str) -> Result<f32, ParameterError<'_>> {
    parse_float_in_range(text, f32::NEG_INFINITY, f32::INFINITY)
}

fn any_hex(text: &str) -> Result<u64, ParameterError<'_>> {
    parse_hex_in_range(text, u64::MIN, u64::MAX)
}

impl ArgSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    /**
    Build a specification from a textual record.

    Bounds are parsed with the same parser the argument itself will use
    (so a `hex` bound may be written `0xFF`), and default to the full range
    of the type when absent. Options are split on commas, trimmed, and empty
    entries are dropped. Whether `min <= max` is not checked.
    */
    pub fn from_record(record: &ArgRecord<'_>) -> Result<Self, SpecError> {
        let name = record.name;

        let kind = match record.kind.trim() {
            kind if iequals(kind, "uint32") => ArgKind::Uint32 {
                min: bound(name, "min", record.min, u32::MIN, any_u32)?,
                max: bound(name, "max", record.max, u32::MAX, any_u32)?,
            },
            kind if iequals(kind, "uint64") => ArgKind::Uint64 {
                min: bound(name, "min", record.min, u64::MIN, any_u64)?,
                max: bound(name, "max", record.max, u64::MAX, any_u64)?,
            },
            kind if iequals(kind, "int") => ArgKind::Int {
                min: bound(name, "min", record.min, i32::MIN, any_i32)?,
                max: bound(name, "max", record.max, i32::MAX, any_i32)?,
            },
            kind if iequals(kind, "float") => ArgKind::Float {
                min: bound(name, "min", record.min, f32::MIN, any_f32)?,
                max: bound(name, "max", record.max, f32::MAX, any_f32)?,
            },
            kind if iequals(kind, "hex") => ArgKind::Hex {
                min: bound(name, "min", record.min, u64::MIN, any_hex)?,
                max: bound(name, "max", record.max, u64::MAX, any_hex)?,
            },
            kind if iequals(kind, "bool") => ArgKind::Bool,
            kind if iequals(kind, "string") => {
                let options: Vec<String> = record
                    .options
                    .unwrap_or("")
                    .split(',')
                    .map(str::trim)
                    .filter(|option| !option.is_empty())
                    .map(str::to_owned)
                    .collect();

                if options.is_empty() {
                    return Err(SpecError::MissingOptions {
                        name: name.to_owned(),
                    });
                }

                ArgKind::String { options }
            }
            kind if iequals(kind, "ip") => ArgKind::Ip,
            kind if iequals(kind, "ip_mask") => ArgKind::IpMask,
            kind if iequals(kind, "custom") => ArgKind::Custom {
                validator: record
                    .validator
                    .map(str::trim)
                    .filter(|validator| !validator.is_empty())
                    .ok_or_else(|| SpecError::MissingValidator {
                        name: name.to_owned(),
                    })?
                    .to_owned(),
            },
            kind => {
                return Err(SpecError::UnknownKind {
                    name: name.to_owned(),
                    kind: kind.to_owned(),
                });
            }
        };

        Ok(Self::new(name, record.description, kind))
    }

    /**
    Parse `arg` according to this specification.

    A [custom][ArgKind::Custom] argument whose validator isn't registered in
    `validators` always fails, without running anything.
    */
    pub fn parse<'arg, E: Error<'arg>>(
        &self,
        arg: &'arg str,
        validators: &Validators,
    ) -> Result<ArgValue, E> {
        match self.kind {
            ArgKind::Uint32 { min, max } => parse_uint32_in_range(arg, min, max).map(ArgValue::Uint32),
            ArgKind::Uint64 { min, max } => parse_uint64_in_range(arg, min, max).map(ArgValue::Uint64),
            ArgKind::Int { min, max } => parse_int_in_range(arg, min, max).map(ArgValue::Int),
            ArgKind::Float { min, max } => parse_float_in_range(arg, min, max).map(ArgValue::Float),
            ArgKind::Hex { min, max } => parse_hex_in_range(arg, min, max).map(ArgValue::Hex),
            ArgKind::Bool => parse_bool(arg).map(ArgValue::Bool),
            ArgKind::String { ref options } => {
                parse_string_option(arg, options).map(|index| ArgValue::Choice {
                    index,
                    value: options[index].clone(),
                })
            }
            ArgKind::Ip => parse_ipv4(arg).map(ArgValue::Ip),
            ArgKind::IpMask => parse_ipv4_with_netmask(arg).map(ArgValue::IpMask),
            ArgKind::Custom { ref validator } => match validators.get(validator) {
                Some(validator) => parse_custom(arg, validator).map(ArgValue::Custom),
                None => Err(E::custom(lazy_format!(
                    "no validator named {validator:?} is registered"
                ))),
            },
        }
    }
}
