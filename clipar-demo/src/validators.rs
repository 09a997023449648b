use clipar::{lexical::is_hex_digits, spec::Validators};

/// A MAC address: six pairs of hex digits separated by colons or dashes,
/// normalized to lowercase with colons.
pub fn mac(arg: &str) -> Option<String> {
    let separator = if arg.contains('-') { '-' } else { ':' };

    let mut octets = arg.split(separator);
    let mut normalized = String::with_capacity(17);

    for index in 0..6 {
        let octet = octets.next().filter(|octet| octet.len() == 2 && is_hex_digits(octet))?;

        if index > 0 {
            normalized.push(':');
        }
        normalized.push_str(&octet.to_ascii_lowercase());
    }

    match octets.next() {
        None => Some(normalized),
        Some(_) => None,
    }
}

/// A DNS host name: dot separated labels of letters, digits and inner
/// hyphens, each at most 63 characters, at most 253 characters in total.
pub fn hostname(arg: &str) -> Option<String> {
    let name = arg.strip_suffix('.').unwrap_or(arg);

    let valid_label = |label: &str| {
        (1..=63).contains(&label.len())
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    };

    (!name.is_empty() && name.len() <= 253 && name.split('.').all(valid_label))
        .then(|| name.to_ascii_lowercase())
}

/// All of the validators that a command table can refer to by name
pub fn builtin() -> Validators {
    let mut validators = Validators::new();
    validators.register("mac", mac).register("hostname", hostname);
    validators
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_addresses() {
        assert_eq!(mac("00:1A:2b:3c:4D:5e").as_deref(), Some("00:1a:2b:3c:4d:5e"));
        assert_eq!(mac("00-1a-2b-3c-4d-5e").as_deref(), Some("00:1a:2b:3c:4d:5e"));

        assert_eq!(mac("00:1a:2b:3c:4d"), None);
        assert_eq!(mac("00:1a:2b:3c:4d:5e:6f"), None);
        assert_eq!(mac("00:1a:2b:3c:4d:5g"), None);
        assert_eq!(mac("00:1a-2b:3c:4d:5e"), None);
        assert_eq!(mac("0:1a:2b:3c:4d:5e"), None);
        assert_eq!(mac(""), None);
    }

    #[test]
    fn hostnames() {
        assert_eq!(hostname("Example.COM").as_deref(), Some("example.com"));
        assert_eq!(hostname("router-1.").as_deref(), Some("router-1"));

        assert_eq!(hostname(""), None);
        assert_eq!(hostname("."), None);
        assert_eq!(hostname("a..b"), None);
        assert_eq!(hostname("-router"), None);
        assert_eq!(hostname("under_score"), None);
        assert_eq!(hostname(&"a".repeat(64)), None);
    }

    #[test]
    fn builtins_are_registered() {
        let validators = builtin();
        assert_eq!(validators.names().collect::<Vec<_>>(), ["hostname", "mac"]);
    }
}
