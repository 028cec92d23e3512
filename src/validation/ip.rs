// src/validation/ip.rs

use std::net::Ipv4Addr;

/// True when the string is a dotted-decimal IPv4 address: exactly four
/// octets, each 0–255. IPv6 and abbreviated forms are rejected.
pub fn is_valid_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}
