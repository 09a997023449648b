/*!
IPv4 address parsers, with and without a `/N` netmask suffix.

[`parse_ip_address`] and [`parse_ip_address_with_netmask`] only report
validity. [`parse_ipv4`] and [`parse_ipv4_with_netmask`] apply exactly the
same rules and hand back the parsed address.
*/

use core::{
    fmt::{self, Display},
    net::Ipv4Addr,
};

use crate::{
    error::{EmptyError, Error, Shape},
    lexical::is_digits,
    numeric::parse_unsigned_in_range,
    split_once,
};

/// The longest text that can be an IPv4 address (`255.255.255.255`). Longer
/// input is rejected before it's examined.
pub const MAX_IPV4_LEN: usize = 15;

/// The largest netmask prefix length
pub const MAX_PREFIX_LEN: u8 = 32;

/// An IPv4 address with a prefix length, as in `10.0.0.0/24`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Net {
    address: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Net {
    /// Create a new `Ipv4Net`. Returns `None` if the prefix is longer than 32.
    #[inline]
    #[must_use]
    pub const fn new(address: Ipv4Addr, prefix: u8) -> Option<Self> {
        match prefix <= MAX_PREFIX_LEN {
            true => Some(Self { address, prefix }),
            false => None,
        }
    }

    /// The address, exactly as given (host bits are not cleared)
    #[inline]
    #[must_use]
    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    #[inline]
    #[must_use]
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The netmask for this prefix length, such as `255.255.255.0` for `/24`
    #[must_use]
    pub fn netmask(&self) -> Ipv4Addr {
        let bits = u32::MAX
            .checked_shl(u32::from(MAX_PREFIX_LEN - self.prefix))
            .unwrap_or(0);

        Ipv4Addr::from(bits)
    }

    /// The address with all of the host bits cleared
    #[must_use]
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.address) & u32::from(self.netmask()))
    }
}

impl Display for Ipv4Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

/// Parse one component of a dotted quad. `arg` is the whole address, for
/// errors about its shape.
#[inline]
fn parse_octet<'arg, E: Error<'arg>>(arg: &'arg str, component: &'arg str) -> Result<u8, E> {
    if !is_digits(component) {
        return Err(E::malformed(arg, Shape::Ipv4));
    }

    // Bounded by MAX_IPV4_LEN digits, which always fits in a u64
    let value: u64 = parse_unsigned_in_range(component, 0, u64::from(u8::MAX))?;
    u8::try_from(value).map_err(|_| E::out_of_range(component, 0, u8::MAX))
}

/**
Parse an IPv4 address in the form `A.B.C.D`.

There must be exactly four components, and each must be a (non-empty) run
of decimal digits with a value no greater than 255. Leading zeros are
accepted and don't change the value: `010.0.0.1` is `10.0.0.1`.
*/
pub fn parse_ipv4<'arg, E: Error<'arg>>(arg: &'arg str) -> Result<Ipv4Addr, E> {
    if arg.is_empty() {
        return Err(E::empty());
    }

    if arg.len() > MAX_IPV4_LEN {
        return Err(E::too_long(arg, MAX_IPV4_LEN));
    }

    let mut components = arg.split('.');
    let mut octets = [0u8; 4];

    for octet in &mut octets {
        let component = components
            .next()
            .ok_or_else(|| E::malformed(arg, Shape::Ipv4))?;

        *octet = parse_octet(arg, component)?;
    }

    match components.next() {
        None => Ok(Ipv4Addr::from(octets)),
        Some(_) => Err(E::malformed(arg, Shape::Ipv4)),
    }
}

/**
Parse an IPv4 address with a netmask, in the form `A.B.C.D/N`.

Everything before the first `/` must be a valid [IPv4 address][parse_ipv4];
everything after it must be a run of decimal digits with a value no greater
than 32. The address is always checked before the netmask.
*/
pub fn parse_ipv4_with_netmask<'arg, E: Error<'arg>>(arg: &'arg str) -> Result<Ipv4Net, E> {
    if arg.is_empty() {
        return Err(E::empty());
    }

    let (address, prefix) =
        split_once(arg, b'/').ok_or_else(|| E::malformed(arg, Shape::Ipv4WithNetmask))?;

    let address = parse_ipv4(address)?;

    if !is_digits(prefix) {
        return Err(E::malformed(arg, Shape::Ipv4WithNetmask));
    }

    let prefix = parse_unsigned_in_range(prefix, 0, MAX_PREFIX_LEN)?;

    Ok(Ipv4Net { address, prefix })
}

/// Check that `arg` is an IPv4 address. See [`parse_ipv4`].
#[inline]
#[must_use]
pub fn parse_ip_address(arg: &str) -> bool {
    parse_ipv4::<EmptyError>(arg).is_ok()
}

/// Check that `arg` is an IPv4 address with a netmask. See
/// [`parse_ipv4_with_netmask`].
#[inline]
#[must_use]
pub fn parse_ip_address_with_netmask(arg: &str) -> bool {
    parse_ipv4_with_netmask::<EmptyError>(arg).is_ok()
}
