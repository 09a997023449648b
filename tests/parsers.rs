use clipar::{
    EmptyError, ParameterError, Store,
    choice::{parse_bool, parse_string_option},
    custom::parse_custom,
    ipv4::{parse_ip_address, parse_ip_address_with_netmask},
    numeric::{
        parse_float_in_range, parse_hex_in_range, parse_int_in_range, parse_uint32_in_range,
        parse_uint64_in_range,
    },
};
use proptest::prelude::*;
use rstest::rstest;

const SENTINEL: u32 = 0xDEAD_BEEF;

#[test]
fn uint32_round_trip_within_range() {
    let mut out = SENTINEL;
    assert!(parse_uint32_in_range::<EmptyError>("42", 0, 100).store(&mut out));
    assert_eq!(out, 42);
}

#[rstest]
#[case("101")]
#[case("-1")]
#[case("4294967296")]
#[case("")]
#[case("12a")]
fn uint32_failure_leaves_slot_untouched(#[case] input: &str) {
    let mut out = SENTINEL;
    assert!(!parse_uint32_in_range::<EmptyError>(input, 0, 100).store(&mut out));
    assert_eq!(out, SENTINEL);
}

#[test]
fn signed_integers() {
    assert_eq!(parse_int_in_range::<EmptyError>("-5", -10, 10), Ok(-5));
    assert!(parse_int_in_range::<EmptyError>("-", -10, 10).is_err());
    assert!(parse_int_in_range::<EmptyError>("+", -10, 10).is_err());
}

#[test]
fn hex() {
    assert_eq!(parse_hex_in_range::<EmptyError>("0x1F", 0, 255), Ok(31));
    assert!(parse_hex_in_range::<EmptyError>("1G", 0, 255).is_err());
}

#[test]
fn booleans() {
    assert_eq!(parse_bool::<EmptyError>("YES"), Ok(true));
    assert!(parse_bool::<EmptyError>("maybe").is_err());
}

#[test]
fn string_options() {
    assert_eq!(
        parse_string_option::<EmptyError>("b", &["a", "b", "c"]),
        Ok(1)
    );
    assert!(parse_string_option::<EmptyError>("B", &["a", "b", "c"]).is_err());
}

#[rstest]
#[case("192.168.1.1", true)]
#[case("192.168.1.256", false)]
#[case("1.2.3", false)]
#[case("1.2.3.4.5", false)]
#[case("255.255.255.255", true)]
#[case("1.2.3.4 ", false)]
fn ip_addresses(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(parse_ip_address(input), valid);
}

#[rstest]
#[case("10.0.0.0/24", true)]
#[case("10.0.0.0/0", true)]
#[case("10.0.0.0/32", true)]
#[case("10.0.0.0/33", false)]
#[case("10.0.0.0", false)]
#[case("10.0.0.0/", false)]
#[case("10.0.0/24", false)]
fn ip_addresses_with_netmask(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(parse_ip_address_with_netmask(input), valid);
}

#[test]
fn one_above_the_width_maximum_fails() {
    assert_eq!(
        parse_uint32_in_range::<ParameterError>("4294967296", 0, u32::MAX),
        Err(ParameterError::Overflow { arg: "4294967296" })
    );
    assert_eq!(
        parse_uint64_in_range::<ParameterError>("18446744073709551616", 0, u64::MAX),
        Err(ParameterError::Overflow {
            arg: "18446744073709551616"
        })
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
fn custom_validators_decide_alone() {
    let shouty = |arg: &str| arg.chars().all(char::is_uppercase).then_some(arg.len());

    assert_eq!(parse_custom::<_, EmptyError>("LOUD", &shouty), Ok(4));
    assert!(parse_custom::<_, EmptyError>("quiet", &shouty).is_err());
}

proptest! {
    #[test]
    fn uint32_range(value: u32, a: u32, b: u32) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let text = value.to_string();

        let mut out = SENTINEL;
        let stored = parse_uint32_in_range::<EmptyError>(&text, min, max).store(&mut out);

        if (min..=max).contains(&value) {
            prop_assert!(stored);
            prop_assert_eq!(out, value);
        } else {
            prop_assert!(!stored);
            prop_assert_eq!(out, SENTINEL);
        }
    }

    #[test]
    fn parsers_are_deterministic(text in "\\PC{0,20}") {
        prop_assert_eq!(
            parse_int_in_range::<ParameterError>(&text, -100, 100),
            parse_int_in_range::<ParameterError>(&text, -100, 100)
        );
        prop_assert_eq!(
            parse_float_in_range::<ParameterError>(&text, -1.0, 1.0),
            parse_float_in_range::<ParameterError>(&text, -1.0, 1.0)
        );
        prop_assert_eq!(parse_ip_address(&text), parse_ip_address(&text));
        prop_assert_eq!(parse_bool::<EmptyError>(&text), parse_bool::<EmptyError>(&text));
    }
}
