/*!
Extension point for argument kinds that the built-in parsers don't cover.
*/

use crate::error::Error;

/**
A custom validator for a single argument.

A validator decides whether an argument is acceptable and, if so, what value
it produces. Any closure of the form `Fn(&str) -> Option<T>` is a validator.
*/
pub trait Validator<'arg> {
    type Output;

    /// Validate `arg`, returning its value if it's acceptable.
    fn validate(&self, arg: &'arg str) -> Option<Self::Output>;
}

impl<'arg, F, T> Validator<'arg> for F
where
    F: Fn(&'arg str) -> Option<T> + ?Sized,
{
    type Output = T;

    #[inline]
    fn validate(&self, arg: &'arg str) -> Option<T> {
        self(arg)
    }
}

/// Parse `arg` with a custom validator. The verdict is the validator's
/// alone; nothing is checked before or after it runs.
#[inline]
pub fn parse_custom<'arg, V, E>(arg: &'arg str, validator: &V) -> Result<V::Output, E>
where
    V: Validator<'arg> + ?Sized,
    E: Error<'arg>,
{
    validator.validate(arg).ok_or_else(|| E::rejected(arg))
}
