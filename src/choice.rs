/*!
Parsers that pick from a fixed set of words: booleans and enumerated string
options.
*/

use crate::{
    error::{Error, Shape},
    lexical::iequals,
};

const TRUE_WORDS: [&str; 3] = ["true", "1", "yes"];
const FALSE_WORDS: [&str; 3] = ["false", "0", "no"];

/// Parse a boolean. `true`, `1` and `yes` are true; `false`, `0` and `no`
/// are false. Matching ignores ASCII case; anything else is an error.
pub fn parse_bool<'arg, E: Error<'arg>>(arg: &'arg str) -> Result<bool, E> {
    if TRUE_WORDS.iter().any(|word| iequals(arg, word)) {
        Ok(true)
    } else if FALSE_WORDS.iter().any(|word| iequals(arg, word)) {
        Ok(false)
    } else if arg.is_empty() {
        Err(E::empty())
    } else {
        Err(E::malformed(arg, Shape::Bool))
    }
}

/**
Find `arg` in `options`, returning the index of the first option that is
exactly equal to it. Comparison is byte-for-byte, so it is case sensitive. An
empty set of options never matches anything.
*/
pub fn parse_string_option<'arg, E: Error<'arg>>(
    arg: &'arg str,
    options: &[impl AsRef<str>],
) -> Result<usize, E> {
    options
        .iter()
        .position(|option| option.as_ref() == arg)
        .ok_or_else(|| E::should_be(arg, options))
}
