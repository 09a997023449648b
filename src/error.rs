/*!
Error traits and basic implementations for the parsers.

Every parser in [`clipar`][crate] is generic over an [`Error`], so that the
caller decides how much information a failure carries. [`EmptyError`]
carries none: all failures look alike, which is usually all a command
handler needs. With the `std` feature, [`ParameterError`] records what went
wrong and the offending text, for messages intended for a user.
*/

use core::fmt::{self, Display};

/// The grammar an argument was expected to match, for shape-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One or more ASCII decimal digits
    Digits,

    /// Decimal digits with an optional leading `+` or `-`
    Integer,

    /// One or more hex digits, after an optional `0x` prefix
    HexDigits,

    /// A floating point number
    Float,

    /// One of `true`, `false`, `yes`, `no`, `1`, `0`
    Bool,

    /// `A.B.C.D`
    Ipv4,

    /// `A.B.C.D/N`
    Ipv4WithNetmask,
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Shape::Digits => "decimal digits",
            Shape::Integer => "an optionally signed decimal integer",
            Shape::HexDigits => "hexadecimal digits",
            Shape::Float => "a floating point number",
            Shape::Bool => "true/false, yes/no, or 1/0",
            Shape::Ipv4 => "an IPv4 address (A.B.C.D)",
            Shape::Ipv4WithNetmask => "an IPv4 address with a netmask (A.B.C.D/N)",
        })
    }
}

/// Error for things that can go wrong when parsing a single argument
pub trait Error<'arg> {
    /// The argument was empty
    fn empty() -> Self;

    /// The argument's characters don't match the expected grammar
    fn malformed(arg: &'arg str, expected: Shape) -> Self;

    /// The argument is too large for the type it's being parsed into
    fn overflow(arg: &'arg str) -> Self;

    /// The argument parsed correctly, but isn't within the inclusive range
    fn out_of_range(arg: &'arg str, min: impl Display, max: impl Display) -> Self;

    /// The argument is longer than this parser will ever accept
    fn too_long(arg: &'arg str, limit: usize) -> Self;

    /// The argument should have been one of these
    fn should_be(arg: &'arg str, expected: &[impl AsRef<str>]) -> Self;

    /// A custom validator rejected the argument
    fn rejected(arg: &'arg str) -> Self;

    /// Something else went wrong
    fn custom(message: impl Display) -> Self;
}

/// An error that contains no data. Every cause of failure produces the same
/// value, so callers can't (and needn't) tell them apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyError;

impl Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument")
    }
}

impl core::error::Error for EmptyError {}

impl<'arg> Error<'arg> for EmptyError {
    #[inline(always)]
    fn empty() -> Self {
        Self
    }

    #[inline(always)]
    fn malformed(_: &'arg str, _: Shape) -> Self {
        Self
    }

    #[inline(always)]
    fn overflow(_: &'arg str) -> Self {
        Self
    }

    #[inline(always)]
    fn out_of_range(_: &'arg str, _: impl Display, _: impl Display) -> Self {
        Self
    }

    #[inline(always)]
    fn too_long(_: &'arg str, _: usize) -> Self {
        Self
    }

    #[inline(always)]
    fn should_be(_: &'arg str, _: &[impl AsRef<str>]) -> Self {
        Self
    }

    #[inline(always)]
    fn rejected(_: &'arg str) -> Self {
        Self
    }

    #[inline(always)]
    fn custom(_: impl Display) -> Self {
        Self
    }
}

#[cfg(feature = "std")]
mod with_std {
    use std::{
        borrow::ToOwned,
        fmt::{self, Display},
        string::{String, ToString},
        vec::Vec,
    };

    use joinery::JoinableIterator;

    use super::{Error, Shape};

    /// An error parsing a single argument, recording the cause and the text
    /// that caused it.
    #[derive(Debug, Clone, PartialEq)]
    #[non_exhaustive]
    pub enum ParameterError<'arg> {
        /// The argument was empty
        Empty,

        /// The argument didn't match the expected grammar
        Malformed { arg: &'arg str, expected: Shape },

        /// The argument is too large for its type
        Overflow { arg: &'arg str },

        /// The argument was outside of `[min, max]`
        OutOfRange {
            arg: &'arg str,
            min: String,
            max: String,
        },

        /// The argument was longer than the parser accepts
        TooLong { arg: &'arg str, limit: usize },

        /// The argument wasn't one of the expected options
        ShouldBe {
            arg: &'arg str,
            expected: Vec<String>,
        },

        /// A custom validator rejected the argument
        Rejected { arg: &'arg str },

        /// Something else went wrong
        Custom { message: String },
    }

    impl<'arg> Error<'arg> for ParameterError<'arg> {
        fn empty() -> Self {
            Self::Empty
        }

        fn malformed(arg: &'arg str, expected: Shape) -> Self {
            Self::Malformed { arg, expected }
        }

        fn overflow(arg: &'arg str) -> Self {
            Self::Overflow { arg }
        }

        fn out_of_range(arg: &'arg str, min: impl Display, max: impl Display) -> Self {
            Self::OutOfRange {
                arg,
                min: min.to_string(),
                max: max.to_string(),
            }
        }

        fn too_long(arg: &'arg str, limit: usize) -> Self {
            Self::TooLong { arg, limit }
        }

        fn should_be(arg: &'arg str, expected: &[impl AsRef<str>]) -> Self {
            Self::ShouldBe {
                arg,
                expected: expected
                    .iter()
                    .map(|option| option.as_ref().to_owned())
                    .collect(),
            }
        }

        fn rejected(arg: &'arg str) -> Self {
            Self::Rejected { arg }
        }

        fn custom(message: impl Display) -> Self {
            Self::Custom {
                message: message.to_string(),
            }
        }
    }

    impl Display for ParameterError<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Empty => write!(f, "argument was empty"),
                Self::Malformed { arg, expected } => {
                    write!(f, "{arg:?} isn't valid; expected {expected}")
                }
                Self::Overflow { arg } => write!(f, "{arg:?} is too large"),
                Self::OutOfRange { arg, min, max } => {
                    write!(f, "{arg:?} is out of range; must be in [{min}, {max}]")
                }
                Self::TooLong { arg, limit } => {
                    write!(f, "{arg:?} is longer than {limit} characters")
                }
                Self::ShouldBe { arg, expected } if expected.is_empty() => {
                    write!(f, "{arg:?} isn't allowed; there are no valid options")
                }
                Self::ShouldBe { arg, expected } => write!(
                    f,
                    "{arg:?} should be one of {}",
                    expected.iter().join_with(", ")
                ),
                Self::Rejected { arg } => write!(f, "{arg:?} was rejected"),
                Self::Custom { message } => write!(f, "{message}"),
            }
        }
    }

    impl core::error::Error for ParameterError<'_> {}
}

#[cfg(feature = "std")]
pub use with_std::*;
