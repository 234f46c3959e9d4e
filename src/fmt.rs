use crate::{
    error::{
        ConfigurationError, FactoryError, InputTypeError, UnknownFieldError, ValidationError,
        ValidationErrorKind,
    },
    log::debug,
    map, Part, Uri,
};
use core::fmt;

/// Expands a list of part names into the canonical parts to recompose.
///
/// An empty list selects every part. Otherwise:
///
/// - `authority` adds the user, password, host and port, and nothing else
///   is adjusted.
/// - Without `host`, the user, password and port are dropped.
/// - Without `user`, the password is dropped.
/// - `userinfo` adds the user and password.
///
/// Unknown names select nothing.
pub(crate) fn select_parts<I, P>(parts: I) -> Vec<Part>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut given = false;
    let mut parts: Vec<Part> = parts
        .into_iter()
        .filter_map(|name| {
            given = true;
            let part = Part::from_name(name.as_ref());
            if part.is_none() {
                debug!("ignoring part {:?}", name.as_ref());
            }
            part
        })
        .collect();

    if !given {
        return Part::CANONICAL.to_vec();
    }

    if parts.contains(&Part::Authority) {
        parts.extend(Part::AUTHORITY);
    } else if !parts.contains(&Part::Host) {
        parts.retain(|p| !matches!(p, Part::User | Part::Pass | Part::Port));
    } else {
        if !parts.contains(&Part::User) {
            parts.retain(|&p| p != Part::Pass);
        }
        if parts.contains(&Part::Userinfo) {
            parts.extend([Part::User, Part::Pass]);
        }
    }
    parts
}

impl Uri {
    /// Recomposes the given canonical parts in canonical order.
    pub(crate) fn recompose(&self, parts: &[Part]) -> String {
        let map = map::filter(map::intersect(self.to_map(), parts), |_, v| v.is_some());
        let get = |part| map.get(&part).and_then(Option::as_deref);

        let mut buf = String::new();
        if let Some(scheme) = get(Part::Scheme) {
            buf.push_str(scheme);
            buf.push(':');
        }
        let host = get(Part::Host);
        if let Some(host) = host {
            buf.push_str("//");
            if let Some(user) = get(Part::User) {
                buf.push_str(user);
                if let Some(pass) = get(Part::Pass) {
                    buf.push(':');
                    buf.push_str(pass);
                }
                buf.push('@');
            }
            buf.push_str(host);
            if let Some(port) = get(Part::Port) {
                buf.push(':');
                buf.push_str(port);
            }
        }
        if let Some(path) = get(Part::Path) {
            // A path starting with "//" would be read back as an authority.
            if host.is_none() && path.starts_with("//") {
                buf.push_str("/.");
            }
            buf.push_str(path);
        }
        if let Some(query) = get(Part::Query) {
            buf.push('?');
            buf.push_str(query);
        }
        if let Some(fragment) = get(Part::Fragment) {
            buf.push('#');
            buf.push_str(fragment);
        }
        buf
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.recompose(&Part::CANONICAL))
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("user", &self.user())
            .field("pass", &self.pass().map(|_| "****"))
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown URI part {:?}", self.name)
    }
}

impl fmt::Display for InputTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected no value, a string or a URI as source")
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::UnknownHandler(name) => {
                write!(f, "no URI handler registered as {name:?}")
            }
            ConfigurationError::InvalidHandler { name, source } => {
                write!(f, "invalid URI handler {name:?}: {source}")
            }
        }
    }
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::Configuration(e) => fmt::Display::fmt(e, f),
            FactoryError::InputType(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ValidationErrorKind::InvalidHost => "invalid host",
            ValidationErrorKind::InvalidPort => "non-digit character in port",
            ValidationErrorKind::PortOutOfRange => "port out of range",
            ValidationErrorKind::InvalidUserinfo => "invalid character in ",
        };
        f.write_str(msg)?;
        if self.kind == ValidationErrorKind::InvalidUserinfo {
            f.write_str(self.part.as_str())?;
        }
        Ok(())
    }
}
