/*!
Range-bounded numeric parsers.

All of these follow the same steps: reject empty input, check the shape of
the text (digits only, optional sign, hex digits), convert the *entire*
string into the target type, and finally check the inclusive `[min, max]`
range. Text that would overflow the target type is an error, never a wrapped
or saturated value. `min <= max` is the caller's business; an inverted range
simply rejects everything.

The named functions (`parse_uint32_in_range` and friends) use fixed widths.
For other widths, use the generic versions, which accept any type
implementing [`Unsigned`], [`Signed`] or [`Float`].
*/

use core::{
    fmt::Display,
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use crate::{
    error::{Error, Shape},
    lexical::{is_digits, is_hex_digits, is_valid_int},
};

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can be produced by the range parsers
pub trait Integer: sealed::Sealed + Copy + PartialOrd + Display {
    /// The smallest value of this type
    const MIN: Self;

    /// The largest value of this type
    const MAX: Self;

    #[doc(hidden)]
    fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError>;
}

/// Unsigned integers, for [`parse_unsigned_in_range`] and
/// [`parse_hex_in_range_of`]
pub trait Unsigned: Integer {}

/// Signed integers, for [`parse_signed_in_range`]
pub trait Signed: Integer {}

/// Floating point types, for [`parse_float_in_range_of`]
pub trait Float: sealed::Sealed + Copy + PartialOrd + Display + FromStr {
    /// The smallest finite value of this type
    const MIN: Self;

    /// The largest finite value of this type
    const MAX: Self;

    #[doc(hidden)]
    fn is_infinite(self) -> bool;
}

macro_rules! integers {
    ($trait:ident: $($type:ident)*) => {
        $(
            impl sealed::Sealed for $type {}

            impl Integer for $type {
                const MIN: Self = $type::MIN;
                const MAX: Self = $type::MAX;

                #[inline]
                fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                    $type::from_str_radix(src, radix)
                }
            }

            impl $trait for $type {}
        )*
    };
}

integers! { Unsigned: u8 u16 u32 u64 u128 usize }
integers! { Signed: i8 i16 i32 i64 i128 isize }

macro_rules! floats {
    ($($type:ident)*) => {
        $(
            impl sealed::Sealed for $type {}

            impl Float for $type {
                const MIN: Self = $type::MIN;
                const MAX: Self = $type::MAX;

                #[inline]
                fn is_infinite(self) -> bool {
                    $type::is_infinite(self)
                }
            }
        )*
    };
}

floats! { f32 f64 }

/// Convert `digits` (which is `arg`, or a suffix of it) with the given radix.
/// The shape has already been checked, so the only expected failure here is
/// overflow.
#[inline]
fn convert<'arg, T, E>(arg: &'arg str, digits: &str, radix: u32, shape: Shape) -> Result<T, E>
where
    T: Integer,
    E: Error<'arg>,
{
    T::from_str_radix(digits, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => E::overflow(arg),
        _ => E::malformed(arg, shape),
    })
}

/// Check the inclusive range. Written in terms of `contains` so that values
/// that don't compare at all (NaN) are rejected.
#[inline]
fn in_range<'arg, T, E>(arg: &'arg str, value: T, min: T, max: T) -> Result<T, E>
where
    T: Copy + PartialOrd + Display,
    E: Error<'arg>,
{
    match (min..=max).contains(&value) {
        true => Ok(value),
        false => Err(E::out_of_range(arg, min, max)),
    }
}

/// Parse a decimal unsigned integer of any width in `[min, max]`.
pub fn parse_unsigned_in_range<'arg, T, E>(arg: &'arg str, min: T, max: T) -> Result<T, E>
where
    T: Unsigned,
    E: Error<'arg>,
{
    if arg.is_empty() {
        return Err(E::empty());
    }

    if !is_digits(arg) {
        return Err(E::malformed(arg, Shape::Digits));
    }

    let value = convert(arg, arg, 10, Shape::Digits)?;
    in_range(arg, value, min, max)
}

/// Parse a decimal signed integer of any width in `[min, max]`. A single
/// leading `+` or `-` is allowed.
pub fn parse_signed_in_range<'arg, T, E>(arg: &'arg str, min: T, max: T) -> Result<T, E>
where
    T: Signed,
    E: Error<'arg>,
{
    if arg.is_empty() {
        return Err(E::empty());
    }

    if !is_valid_int(arg) {
        return Err(E::malformed(arg, Shape::Integer));
    }

    let value = convert(arg, arg, 10, Shape::Integer)?;
    in_range(arg, value, min, max)
}

/**
Parse a floating point number of any width in `[min, max]`.

There's no shape check; the whole string must be accepted by the type's
[`FromStr`] implementation (so `1.5`, `-2e3`, `inf` are fine, while `1.5x`
and ` 1.5` are not). A finite literal too large for the type is an overflow
error rather than an infinity. NaN never falls within a range.
*/
pub fn parse_float_in_range_of<'arg, T, E>(arg: &'arg str, min: T, max: T) -> Result<T, E>
where
    T: Float,
    E: Error<'arg>,
{
    if arg.is_empty() {
        return Err(E::empty());
    }

    let value: T = arg.parse().map_err(|_| E::malformed(arg, Shape::Float))?;

    if value.is_infinite() && !arg.bytes().any(|b| b.eq_ignore_ascii_case(&b'i')) {
        return Err(E::overflow(arg));
    }

    in_range(arg, value, min, max)
}

/// Parse a hexadecimal unsigned integer of any width in `[min, max]`, with
/// an optional `0x` or `0X` prefix.
pub fn parse_hex_in_range_of<'arg, T, E>(arg: &'arg str, min: T, max: T) -> Result<T, E>
where
    T: Unsigned,
    E: Error<'arg>,
{
    if arg.is_empty() {
        return Err(E::empty());
    }

    let digits = arg
        .strip_prefix("0x")
        .or_else(|| arg.strip_prefix("0X"))
        .unwrap_or(arg);

    if !is_hex_digits(digits) {
        return Err(E::malformed(arg, Shape::HexDigits));
    }

    let value = convert(arg, digits, 16, Shape::HexDigits)?;
    in_range(arg, value, min, max)
}

/// Parse an unsigned 32-bit integer in `[min, max]`.
#[inline]
pub fn parse_uint32_in_range<'arg, E: Error<'arg>>(
    arg: &'arg str,
    min: u32,
    max: u32,
) -> Result<u32, E> {
    parse_unsigned_in_range(arg, min, max)
}

/// Parse an unsigned 64-bit integer in `[min, max]`.
#[inline]
pub fn parse_uint64_in_range<'arg, E: Error<'arg>>(
    arg: &'arg str,
    min: u64,
    max: u64,
) -> Result<u64, E> {
    parse_unsigned_in_range(arg, min, max)
}

/// Parse a signed 32-bit integer in `[min, max]`.
#[inline]
pub fn parse_int_in_range<'arg, E: Error<'arg>>(
    arg: &'arg str,
    min: i32,
    max: i32,
) -> Result<i32, E> {
    parse_signed_in_range(arg, min, max)
}

/// Parse a 32-bit float in `[min, max]`.
#[inline]
pub fn parse_float_in_range<'arg, E: Error<'arg>>(
    arg: &'arg str,
    min: f32,
    max: f32,
) -> Result<f32, E> {
    parse_float_in_range_of(arg, min, max)
}

/// Parse a hexadecimal 64-bit unsigned integer in `[min, max]`.
#[inline]
pub fn parse_hex_in_range<'arg, E: Error<'arg>>(
    arg: &'arg str,
    min: u64,
    max: u64,
) -> Result<u64, E> {
    parse_hex_in_range_of(arg, min, max)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::{EmptyError, ParameterError, Store};

    #[rstest]
    #[case("0", 0)]
    #[case("10", 10)]
    #[case("007", 7)]
    #[case("4294967295", u32::MAX)]
    fn uint32_accepts(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(
            parse_uint32_in_range::<EmptyError>(input, 0, u32::MAX),
            Ok(expected)
        );
    }

    #[rstest]
    #[case("")]
    #[case("+1")]
    #[case("-1")]
    #[case("1.0")]
    #[case("12abc")]
    #[case(" 12")]
    #[case("4294967296")]
    #[case("99999999999999999999999")]
    fn uint32_rejects(#[case] input: &str) {
        assert!(parse_uint32_in_range::<EmptyError>(input, 0, u32::MAX).is_err());
    }

    #[test]
    fn uint32_range_is_inclusive() {
        assert_eq!(parse_uint32_in_range::<EmptyError>("5", 5, 9), Ok(5));
        assert_eq!(parse_uint32_in_range::<EmptyError>("9", 5, 9), Ok(9));
        assert!(parse_uint32_in_range::<EmptyError>("4", 5, 9).is_err());
        assert!(parse_uint32_in_range::<EmptyError>("10", 5, 9).is_err());
    }

    #[test]
    fn inverted_range_rejects_everything() {
        assert!(parse_uint32_in_range::<EmptyError>("5", 9, 1).is_err());
    }

    #[test]
    fn uint64_overflow_boundary() {
        assert_eq!(
            parse_uint64_in_range::<EmptyError>("18446744073709551615", 0, u64::MAX),
            Ok(u64::MAX)
        );
        assert_eq!(
            parse_uint64_in_range::<ParameterError>("18446744073709551616", 0, u64::MAX),
            Err(ParameterError::Overflow {
                arg: "18446744073709551616"
            })
        );
    }

    #[rstest]
    #[case("-5", -5)]
    #[case("+5", 5)]
    #[case("-0", 0)]
    #[case("10", 10)]
    #[case("-10", -10)]
    fn int_accepts(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(
            parse_int_in_range::<EmptyError>(input, -10, 10),
            Ok(expected)
        );
    }

    #[rstest]
    #[case("-")]
    #[case("+")]
    #[case("")]
    #[case("--5")]
    #[case("5-")]
    #[case("-11")]
    #[case("11")]
    fn int_rejects(#[case] input: &str) {
        assert!(parse_int_in_range::<EmptyError>(input, -10, 10).is_err());
    }

    #[test]
    fn int_overflow_boundary() {
        assert_eq!(
            parse_int_in_range::<EmptyError>("-2147483648", i32::MIN, i32::MAX),
            Ok(i32::MIN)
        );
        assert_eq!(
            parse_int_in_range::<ParameterError>("2147483648", i32::MIN, i32::MAX),
            Err(ParameterError::Overflow { arg: "2147483648" })
        );
        assert_eq!(
            parse_int_in_range::<ParameterError>("-2147483649", i32::MIN, i32::MAX),
            Err(ParameterError::Overflow {
                arg: "-2147483649"
            })
        );
    }

    #[test]
    fn signed_other_widths() {
        assert_eq!(
            parse_signed_in_range::<i8, EmptyError>("-128", i8::MIN, i8::MAX),
            Ok(-128)
        );
        assert!(parse_signed_in_range::<i8, EmptyError>("128", i8::MIN, i8::MAX).is_err());
        assert_eq!(
            parse_unsigned_in_range::<u16, EmptyError>("65535", 0, u16::MAX),
            Ok(u16::MAX)
        );
    }

    #[rstest]
    #[case("1.5", 1.5)]
    #[case("-2", -2.0)]
    #[case("+0.25", 0.25)]
    #[case("1e1", 10.0)]
    #[case(".5", 0.5)]
    fn float_accepts(#[case] input: &str, #[case] expected: f32) {
        assert_eq!(
            parse_float_in_range::<EmptyError>(input, -10.0, 10.0),
            Ok(expected)
        );
    }

    #[rstest]
    #[case("")]
    #[case("1.5x")]
    #[case(" 1.5")]
    #[case("1.5 ")]
    #[case("abc")]
    #[case("10.5")]
    #[case("NaN")]
    #[case("inf")]
    fn float_rejects(#[case] input: &str) {
        assert!(parse_float_in_range::<EmptyError>(input, -10.0, 10.0).is_err());
    }

    #[test]
    fn float_overflow_is_not_infinity() {
        assert_eq!(
            parse_float_in_range::<ParameterError>("1e39", f32::NEG_INFINITY, f32::INFINITY),
            Err(ParameterError::Overflow { arg: "1e39" })
        );
        assert_eq!(
            parse_float_in_range::<EmptyError>("inf", f32::NEG_INFINITY, f32::INFINITY),
            Ok(f32::INFINITY)
        );
        assert_eq!(
            parse_float_in_range_of::<f64, EmptyError>("1e39", 0.0, f64::MAX),
            Ok(1e39)
        );
    }

    #[rstest]
    #[case("0x1F", 31)]
    #[case("0X1f", 31)]
    #[case("1F", 31)]
    #[case("ff", 255)]
    #[case("0", 0)]
    #[case("0x00ff", 255)]
    fn hex_accepts(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_hex_in_range::<EmptyError>(input, 0, 255), Ok(expected));
    }

    #[rstest]
    #[case("1G")]
    #[case("0x")]
    #[case("")]
    #[case("x1F")]
    #[case("0x0x1")]
    #[case("-1")]
    #[case("100")]
    fn hex_rejects(#[case] input: &str) {
        assert!(parse_hex_in_range::<EmptyError>(input, 0, 255).is_err());
    }

    #[test]
    fn hex_overflow_boundary() {
        assert_eq!(
            parse_hex_in_range::<EmptyError>("0xFFFFFFFFFFFFFFFF", 0, u64::MAX),
            Ok(u64::MAX)
        );
        assert!(parse_hex_in_range::<EmptyError>("0x10000000000000000", 0, u64::MAX).is_err());
        assert!(parse_hex_in_range_of::<u8, EmptyError>("100", 0, u8::MAX).is_err());
    }

    #[test]
    fn failures_report_their_cause() {
        assert_eq!(
            parse_uint32_in_range::<ParameterError>("", 0, 1),
            Err(ParameterError::Empty)
        );
        assert_eq!(
            parse_uint32_in_range::<ParameterError>("x", 0, 1),
            Err(ParameterError::Malformed {
                arg: "x",
                expected: Shape::Digits
            })
        );
        assert!(matches!(
            parse_uint32_in_range::<ParameterError>("2", 0, 1),
            Err(ParameterError::OutOfRange { arg: "2", .. })
        ));
    }

    proptest! {
        #[test]
        fn uint32_in_range_round_trips(min in any::<u32>(), max in any::<u32>(), value in any::<u32>()) {
            let mut out = 0xdead_beef_u32;
            let text = value.to_string();
            let ok = parse_uint32_in_range::<EmptyError>(&text, min, max).store(&mut out);

            if min <= value && value <= max {
                prop_assert!(ok);
                prop_assert_eq!(out, value);
            } else {
                prop_assert!(!ok);
                prop_assert_eq!(out, 0xdead_beef);
            }
        }

        #[test]
        fn int_parse_is_idempotent(text in "[+-]?[0-9]{0,12}") {
            let first = parse_int_in_range::<ParameterError>(&text, -1000, 1000);
            let second = parse_int_in_range::<ParameterError>(&text, -1000, 1000);
            prop_assert_eq!(first, second);
        }
    }
}
