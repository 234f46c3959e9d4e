//! Host and port classification.
//!
//! The predicates in this module are never consulted while parsing: a [`Uri`]
//! accepts any host or port text it is given. Call them directly, or use
//! [`Uri::validate`] and [`Uri::host_kind`], to apply the grammar of
//! [Section 3.2.2 of RFC 3986][host].
//!
//! [`Uri`]: crate::Uri
//! [`Uri::validate`]: crate::Uri::validate
//! [`Uri::host_kind`]: crate::Uri::host_kind
//! [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2

use crate::{component::HostKind, table};
use std::net::{Ipv4Addr, Ipv6Addr};

macro_rules! take_byte {
    ($s:ident) => {
        if $s.is_empty() {
            None
        } else {
            let byte = $s[0];
            $s = &$s[1..];
            Some(byte)
        }
    };
}

// dec-octet = DIGIT             ; 0-9
//           / %x31-39 DIGIT     ; 10-99
//           / "1" 2DIGIT        ; 100-199
//           / "2" %x30-34 DIGIT ; 200-249
//           / "25" %x30-35      ; 250-255
macro_rules! take_dec_octet {
    ($s:ident, $end:pat) => {
        match take_byte!($s) {
            Some(b'0') => match take_byte!($s) {
                $end => Some(0),
                _ => None,
            },
            Some(b'1') => match take_byte!($s) {
                $end => Some(1),
                Some(y @ b'0'..=b'9') => match take_byte!($s) {
                    $end => Some(10 + (y - b'0')),
                    Some(z @ b'0'..=b'9') => match take_byte!($s) {
                        $end => Some(100 + (y - b'0') * 10 + (z - b'0')),
                        _ => None,
                    },
                    _ => None,
                },
                _ => None,
            },
            Some(b'2') => match take_byte!($s) {
                $end => Some(2),
                Some(y @ b'0'..=b'4') => match take_byte!($s) {
                    $end => Some(20 + (y - b'0')),
                    Some(z @ b'0'..=b'9') => match take_byte!($s) {
                        $end => Some(200 + (y - b'0') * 10 + (z - b'0')),
                        _ => None,
                    },
                    _ => None,
                },
                Some(b'5') => match take_byte!($s) {
                    $end => Some(25),
                    Some(z @ b'0'..=b'5') => match take_byte!($s) {
                        $end => Some(250 + (z - b'0')),
                        _ => None,
                    },
                    _ => None,
                },
                Some(y @ b'6'..=b'9') => match take_byte!($s) {
                    $end => Some(20 + (y - b'0')),
                    _ => None,
                },
                _ => None,
            },
            Some(x @ b'3'..=b'9') => match take_byte!($s) {
                $end => Some(x - b'0'),
                Some(y @ b'0'..=b'9') => match take_byte!($s) {
                    $end => Some((x - b'0') * 10 + (y - b'0')),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    };
}

/// Parses an `IPv4address` as defined in RFC 3986.
///
/// Each of the four octets must be a `dec-octet`, so leading zeros
/// such as in `"01"` are rejected.
#[must_use]
pub fn parse_ipv4(s: &str) -> Option<Ipv4Addr> {
    parse_v4_bytes(s.as_bytes()).map(Ipv4Addr::from)
}

/// Checks whether a string is an `IPv4address`.
#[must_use]
pub fn is_ipv4_address(s: &str) -> bool {
    parse_v4_bytes(s.as_bytes()).is_some()
}

fn parse_v4_bytes(mut s: &[u8]) -> Option<[u8; 4]> {
    if s.len() < 7 {
        None
    } else {
        Some([
            take_dec_octet!(s, Some(b'.'))?,
            take_dec_octet!(s, Some(b'.'))?,
            take_dec_octet!(s, Some(b'.'))?,
            #[allow(unused_assignments)]
            take_dec_octet!(s, None)?,
        ])
    }
}

/// Parses an `IPv6address` as defined in RFC 3986.
///
/// All the `h16` and `"::"` forms of the grammar are accepted, with the low
/// 32 bits written either as two `h16` groups or as an embedded IPv4 address.
/// The returned address carries the captured groups.
#[must_use]
pub fn parse_ipv6(s: &str) -> Option<Ipv6Addr> {
    let mut s = s.as_bytes();
    if s.len() < 2 {
        return None;
    }

    let mut segs = [0u16; 8];
    let mut ellipsis_i = 8;

    let mut i = 0;
    while i < 8 {
        match take_segment(&mut s) {
            Some(Seg::Normal(seg)) => {
                if i == 7 {
                    // Trailing colon or too long
                    return None;
                }
                segs[i] = seg;
                i += 1;
            }
            Some(Seg::End(seg)) => {
                segs[i] = seg;
                i += 1;
                break;
            }
            Some(Seg::Colon { double }) => {
                // Multiple ellipses, too many colons in one ellipsis
                // or a single preceding colon
                if ellipsis_i != 8 || (double && i != 0) || (!double && i == 0) {
                    return None;
                }
                ellipsis_i = i;
            }
            Some(Seg::MaybeV4) => {
                if i > 6 {
                    // Not enough space
                    return None;
                }
                let bytes = parse_v4_bytes(s)?;

                segs[i] = u16::from_be_bytes([bytes[0], bytes[1]]);
                segs[i + 1] = u16::from_be_bytes([bytes[2], bytes[3]]);

                i += 2;
                s = &[];
                break;
            }
            Some(Seg::Invalid) => return None,
            None => break,
        }
    }

    if !s.is_empty() {
        // Too many groups
        return None;
    }

    if ellipsis_i == 8 {
        // No ellipsis
        if i != 8 {
            // Too short
            return None;
        }
    } else if i == 8 {
        // Eliding nothing
        return None;
    } else {
        // Shift the segments after the ellipsis to the right.
        for j in (ellipsis_i..i).rev() {
            segs[8 - (i - j)] = segs[j];
            segs[j] = 0;
        }
    }

    Some(segs.into())
}

/// Checks whether a string is an `IPv6address`.
#[must_use]
pub fn is_ipv6_address(s: &str) -> bool {
    parse_ipv6(s).is_some()
}

fn hex_value(x: u8) -> Option<u16> {
    match x {
        b'0'..=b'9' => Some((x - b'0') as u16),
        b'a'..=b'f' => Some((x - b'a' + 10) as u16),
        b'A'..=b'F' => Some((x - b'A' + 10) as u16),
        _ => None,
    }
}

fn take_segment(s: &mut &[u8]) -> Option<Seg> {
    if s.is_empty() {
        return None;
    }

    if s[0] == b':' {
        return Some(match s.get(1) {
            Some(b':') => {
                *s = &s[2..];
                Seg::Colon { double: true }
            }
            // `None` for cases such as "1::".
            _ => {
                *s = &s[1..];
                Seg::Colon { double: false }
            }
        });
    }

    let mut x = match hex_value(s[0]) {
        Some(n) => n,
        None => return Some(Seg::Invalid),
    };
    let mut i = 1;

    while i < 5 {
        return Some(match s.get(i) {
            Some(b':') => {
                *s = &s[i + 1..];
                Seg::Normal(x)
            }
            Some(b'.') => Seg::MaybeV4,
            Some(&b) => match hex_value(b) {
                Some(n) if i < 4 => {
                    x = (x << 4) | n;
                    i += 1;
                    continue;
                }
                _ => Seg::Invalid,
            },
            None => {
                *s = &[];
                Seg::End(x)
            }
        });
    }
    Some(Seg::Invalid)
}

enum Seg {
    // [0-9A-Fa-f]{1,4}:
    Normal(u16),
    // [0-9A-Fa-f]{1,4}$
    End(u16),
    // :{1,2}
    Colon { double: bool },
    // [0-9A-Fa-f]{1,4}\.
    MaybeV4,
    Invalid,
}

/// Checks whether a string matches
/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`.
///
/// The leading `"v"` is matched case-insensitively.
#[must_use]
pub fn is_ipv_future(s: &str) -> bool {
    let rest = match s.as_bytes() {
        [b'v' | b'V', rest @ ..] => rest,
        _ => return false,
    };
    let dot_i = match rest.iter().position(|&x| x == b'.') {
        Some(i) => i,
        None => return false,
    };
    let (ver, addr) = (&rest[..dot_i], &rest[dot_i + 1..]);
    !ver.is_empty()
        && ver.iter().all(|&x| table::HEXDIG.allows(x))
        && !addr.is_empty()
        && table::IPV_FUTURE.validate(addr)
}

/// Checks whether a string matches
/// `reg-name = *( unreserved / pct-encoded / sub-delims )`.
#[must_use]
pub fn is_reg_name(s: &str) -> bool {
    table::REG_NAME.validate(s.as_bytes())
}

/// Checks whether a host is bracket-delimited, as an `IP-literal` is.
///
/// Returns the literal between the brackets on success. The brackets may
/// not appear inside the literal.
#[must_use]
pub fn is_host_ip_literal(host: &str) -> Option<&str> {
    let inner = host.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() || inner.contains(['[', ']']) {
        None
    } else {
        Some(inner)
    }
}

/// Checks whether a port number lies within `1..=65535`.
#[must_use]
pub fn is_port_in_range(port: u32) -> bool {
    (1..=65535).contains(&port)
}

/// Classifies a host by the three alternatives of the `host` rule.
///
/// Returns `None` if the host matches none of them.
#[must_use]
pub fn classify_host(host: &str) -> Option<HostKind> {
    if let Some(literal) = is_host_ip_literal(host) {
        if let Some(addr) = parse_ipv6(literal) {
            Some(HostKind::Ipv6(addr))
        } else if is_ipv_future(literal) {
            Some(HostKind::IpvFuture)
        } else {
            None
        }
    } else if let Some(addr) = parse_ipv4(host) {
        Some(HostKind::Ipv4(addr))
    } else if is_reg_name(host) {
        Some(HostKind::RegName)
    } else {
        None
    }
}
