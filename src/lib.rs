/*!
Strict, allocation-free parsers for positional command-line arguments.

Each parser takes the raw text of one argument, plus whatever describes the
admissible values (an inclusive `[min, max]` range, a set of options, or a
custom [`Validator`][custom::Validator]), and returns the typed value. Parsers
are generic over their [`Error`] type: use [`EmptyError`] when a failure is
simply a failure, or (with the `std` feature) [`ParameterError`] when the
cause should be reported to a user.

```
use clipar::{EmptyError, Store, numeric::parse_uint32_in_range};

let mut port = 0u32;
assert!(parse_uint32_in_range::<EmptyError>("8080", 1, 65535).store(&mut port));
assert_eq!(port, 8080);

assert!(!parse_uint32_in_range::<EmptyError>("70000", 1, 65535).store(&mut port));
assert_eq!(port, 8080);
```

With the `std` feature, the [`spec`] and [`command`] modules build on the
parsers to validate a whole command invocation against a list of argument
specifications, and [`printers`] renders usage messages and errors.
*/

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod choice;
pub mod custom;
pub mod error;
pub mod ipv4;
pub mod lexical;
pub mod numeric;

#[cfg(feature = "std")]
pub mod command;

#[cfg(feature = "std")]
pub mod printers;

#[cfg(feature = "std")]
pub mod spec;

pub use error::{EmptyError, Error, Shape};

#[cfg(feature = "std")]
pub use error::ParameterError;

/**
Write the result of a parse into an existing output slot.

The parsers return a [`Result`], but callers that keep their arguments in
preallocated variables often want the classic "out parameter" contract: the
slot is written if and only if the parse succeeded, and the return value says
which happened. A failed parse never touches the slot.
*/
pub trait Store<T> {
    /// Write the value into `out` if there is one. Returns true if `out`
    /// was written.
    fn store(self, out: &mut T) -> bool;
}

impl<T, E> Store<T> for Result<T, E> {
    #[inline]
    fn store(self, out: &mut T) -> bool {
        match self {
            Ok(value) => {
                *out = value;
                true
            }
            Err(_) => false,
        }
    }
}

/// Split `input` at the first instance of `delimiter`, dropping the delimiter
#[inline]
pub(crate) fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // The delimiter is always ASCII, so both halves are on char boundaries
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
