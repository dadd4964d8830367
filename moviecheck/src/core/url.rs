//! Absolute URL well-formedness check for poster links.
//!
//! Accepts `scheme://[userinfo@]host[:port][path]` where scheme is one of
//! http/https/ftp/ftps and host is a dotted domain with a TLD, `localhost`,
//! an IPv4 literal, or a bracketed IPv6 literal.

use std::net::Ipv6Addr;
use std::sync::LazyLock;

use regex::Regex;

const SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Upper bound on a host name, excluding the port.
const MAX_HOST_LEN: usize = 253;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let ul = r"\x{a1}-\x{d7ff}\x{e000}-\x{ffff}";
    let ipv4 = r"(?:0|25[0-5]|2[0-4][0-9]|1[0-9]?[0-9]?|[1-9][0-9]?)(?:\.(?:0|25[0-5]|2[0-4][0-9]|1[0-9]?[0-9]?|[1-9][0-9]?)){3}";
    let ipv6 = r"\[(?P<ipv6>[0-9a-f:.]+)\]";
    let label = format!(r"[a-z{ul}0-9](?:[a-z{ul}0-9-]{{0,61}}[a-z{ul}0-9])?");
    let tld = format!(r"\.(?:[a-z{ul}][a-z{ul}-]{{0,61}}[a-z{ul}]|xn--[a-z0-9]{{1,59}})\.?");
    let host = format!(r"(?:{label}(?:\.{label})*{tld}|localhost)");
    let pattern = format!(
        r"(?i)^(?P<scheme>[a-z0-9.+-]*)://(?:[^\s:@/]+(?::[^\s:@/]*)?@)?(?P<host>{ipv4}|{ipv6}|{host})(?::[0-9]{{1,5}})?(?:[/?#][^\s]*)?$"
    );
    Regex::new(&pattern).expect("url pattern should be valid")
});

/// True if `candidate` is a well-formed absolute URL no longer than `max_len`.
pub fn is_valid_url(candidate: &str, max_len: usize) -> bool {
    if candidate.is_empty() || candidate.len() > max_len {
        return false;
    }
    let Some(caps) = URL_RE.captures(candidate) else {
        return false;
    };
    let scheme = caps.name("scheme").map_or("", |m| m.as_str());
    if !SCHEMES.iter().any(|known| known.eq_ignore_ascii_case(scheme)) {
        return false;
    }
    if caps
        .name("ipv6")
        .is_some_and(|literal| literal.as_str().parse::<Ipv6Addr>().is_err())
    {
        return false;
    }
    caps.name("host")
        .is_some_and(|host| host.as_str().len() <= MAX_HOST_LEN)
}
