//! Text helpers shared by the locator parsers.

/// Parse a PID token, keeping only positive integers.
pub fn parse_pid(token: &str) -> Option<u32> {
    token.trim().parse::<u32>().ok().filter(|pid| *pid > 0)
}

/// The port of a netstat address column.
///
/// The port follows the last colon, which also covers bracketed IPv6
/// (`[::1]:3000`). Wildcards such as `*:*` have no port.
pub fn parse_port(address: &str) -> Option<u16> {
    let (host, port) = address.rsplit_once(':')?;
    if host.starts_with('[') && !host.ends_with(']') {
        return None;
    }
    port.parse().ok()
}

/// Whether an address column refers to exactly `port`.
pub fn address_has_port(address: &str, port: u16) -> bool {
    parse_port(address) == Some(port)
}

/// Undo the hex escapes lsof applies to unprintable command characters.
pub fn decode_lsof_escapes(name: &str) -> String {
    name.replace("\\x20", " ").replace("\\x2f", "/")
}
