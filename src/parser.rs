use crate::{component::is_valid_scheme, log::debug, Uri};
use std::borrow::Cow;

/// The subcomponents of an authority.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct AuthorityParts {
    pub(crate) user: Option<String>,
    pub(crate) pass: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<String>,
}

/// Splits a URI reference into its components.
///
/// This is the regular expression of Appendix B of RFC 3986 written out by
/// hand:
///
/// ```text
/// ^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?
/// ```
///
/// except that a scheme is only captured when it is a valid scheme name.
/// No component is validated beyond this split.
pub(crate) fn parse(s: &str, suppress_password: bool) -> Uri {
    let s: Cow<'_, str> = if s.contains('\\') {
        Cow::Owned(s.replace('\\', "/"))
    } else {
        Cow::Borrowed(s)
    };
    let mut rest = &s[..];

    let mut scheme = None;
    if let Some(i) = rest.find([':', '/', '?', '#']) {
        if rest.as_bytes()[i] == b':' && is_valid_scheme(&rest.as_bytes()[..i]) {
            scheme = Some(rest[..i].to_owned());
            rest = &rest[i + 1..];
        }
    }

    let mut authority = None;
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        authority = Some(&after[..end]);
        rest = &after[end..];
    }

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    let path = rest[..end].to_owned();
    rest = &rest[end..];

    let mut query = None;
    if let Some(after) = rest.strip_prefix('?') {
        let end = after.find('#').unwrap_or(after.len());
        query = Some(after[..end].to_owned());
        rest = &after[end..];
    }

    let fragment = rest.strip_prefix('#').map(str::to_owned);

    let AuthorityParts {
        user,
        pass,
        host,
        port,
    } = parse_authority(authority, suppress_password);

    Uri {
        scheme,
        user,
        pass,
        host,
        port,
        path,
        query,
        fragment,
    }
}

/// Splits an authority into the user, password, host and port.
///
/// The userinfo ends at the last `'@'` and is split at its first `':'`.
/// An absent authority gives four absent parts.
pub(crate) fn parse_authority(authority: Option<&str>, suppress_password: bool) -> AuthorityParts {
    let authority = match authority {
        Some(authority) => authority,
        None => return AuthorityParts::default(),
    };

    let (userinfo, host_port) = match authority.rfind('@') {
        Some(i) => (Some(&authority[..i]), &authority[i + 1..]),
        None => (None, authority),
    };

    let (user, mut pass) = match userinfo {
        Some(userinfo) => match userinfo.split_once(':') {
            Some((user, pass)) => (Some(user), Some(pass)),
            None => (Some(userinfo), None),
        },
        None => (None, None),
    };
    if suppress_password && pass.take().is_some() {
        debug!("discarding password in userinfo");
    }

    let (host, port) = split_host_port(host_port);

    AuthorityParts {
        user: user.map(str::to_owned),
        pass: pass.map(str::to_owned),
        host: Some(host.to_owned()),
        port: port.map(str::to_owned),
    }
}

/// Splits `host [":" port]`.
///
/// A bracketed IP literal is taken as a whole, so colons inside the brackets
/// never start a port. A trailing colon with no digits after it is dropped.
/// Anything that does not fit these shapes is taken as the host.
fn split_host_port(s: &str) -> (&str, Option<&str>) {
    let (host, rest) = if s.starts_with('[') {
        match s.find(']') {
            Some(i) => s.split_at(i + 1),
            None => return (s, None),
        }
    } else {
        match s.rfind(':') {
            Some(i) => s.split_at(i),
            None => return (s, None),
        }
    };

    match rest.strip_prefix(':') {
        None if rest.is_empty() => (host, None),
        Some("") => (host, None),
        Some(port) if port.bytes().all(|x| x.is_ascii_digit()) => (host, Some(port)),
        _ => (s, None),
    }
}
