//! URI components and part names.

use crate::{error::UnknownFieldError, table};
use core::{fmt, str::FromStr};
use ref_cast::{ref_cast_custom, RefCastCustom};
use std::net::{Ipv4Addr, Ipv6Addr};

/// The name of a URI part.
///
/// The first eight variants are the canonical fields stored in a [`Uri`].
/// [`Authority`] and [`Userinfo`] are views recomposed from them.
///
/// Every method of [`Uri`] that takes part names accepts anything that is
/// `AsRef<str>`, so a `Part` and its string name can be used
/// interchangeably:
///
/// ```
/// use refuri::{Part, Uri};
///
/// let uri = Uri::parse("http://example.com/");
/// assert_eq!(uri.with(Part::Host, Some("a.test")), uri.with("host", Some("a.test")));
/// ```
///
/// [`Uri`]: crate::Uri
/// [`Authority`]: Part::Authority
/// [`Userinfo`]: Part::Userinfo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    /// `scheme`
    Scheme,
    /// `user`
    User,
    /// `pass`
    Pass,
    /// `host`
    Host,
    /// `port`
    Port,
    /// `path`
    Path,
    /// `query`
    Query,
    /// `fragment`
    Fragment,
    /// `authority`, the view `[user[:pass]@]host[:port]`.
    Authority,
    /// `userinfo`, the view `user[:pass]`.
    Userinfo,
}

impl Part {
    /// The canonical fields in recomposition order.
    pub const CANONICAL: [Part; 8] = [
        Part::Scheme,
        Part::User,
        Part::Pass,
        Part::Host,
        Part::Port,
        Part::Path,
        Part::Query,
        Part::Fragment,
    ];

    /// The fields that make up the authority.
    pub const AUTHORITY: [Part; 4] = [Part::User, Part::Pass, Part::Host, Part::Port];

    /// Returns the name of the part.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Part::Scheme => "scheme",
            Part::User => "user",
            Part::Pass => "pass",
            Part::Host => "host",
            Part::Port => "port",
            Part::Path => "path",
            Part::Query => "query",
            Part::Fragment => "fragment",
            Part::Authority => "authority",
            Part::Userinfo => "userinfo",
        }
    }

    /// Looks up a part by its name.
    ///
    /// Names are matched exactly.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Part> {
        Some(match name {
            "scheme" => Part::Scheme,
            "user" => Part::User,
            "pass" => Part::Pass,
            "host" => Part::Host,
            "port" => Part::Port,
            "path" => Part::Path,
            "query" => Part::Query,
            "fragment" => Part::Fragment,
            "authority" => Part::Authority,
            "userinfo" => Part::Userinfo,
            _ => return None,
        })
    }

    /// Checks whether the part is one of the eight stored fields.
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        !matches!(self, Part::Authority | Part::Userinfo)
    }
}

impl AsRef<str> for Part {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Part {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Part::from_name(s).ok_or_else(|| UnknownFieldError::new(s))
    }
}

impl fmt::Display for Part {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a case-insensitive
/// comparison if the scheme specification allows both letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use refuri::{Scheme, Uri};
///
/// let uri = Uri::parse("HTTP://EXAMPLE.COM/");
/// let scheme = uri.scheme().unwrap();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, Scheme::HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// assert_eq!(scheme.default_port(), Some(80));
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

macro_rules! well_known_schemes {
    ($($(#[$attr:meta])* $name:ident = $s:literal, $port:expr;)*) => {
        impl Scheme {
            $(
                $(#[$attr])*
                pub const $name: &'static Scheme = Scheme::new_or_panic($s);
            )*

            /// Returns the default port of a well-known scheme.
            ///
            /// The scheme name is matched case-insensitively.
            #[must_use]
            pub fn default_port(&self) -> Option<u16> {
                $(
                    if self.inner.eq_ignore_ascii_case($s) {
                        return $port;
                    }
                )*
                None
            }
        }
    };
}

well_known_schemes! {
    /// `ftp`
    FTP = "ftp", Some(21);
    /// `ftps`
    FTPS = "ftps", Some(990);
    /// `sftp`
    SFTP = "sftp", Some(115);
    /// `http`
    HTTP = "http", Some(80);
    /// `https`
    HTTPS = "https", Some(443);
    /// `mailto`
    MAILTO = "mailto", None;
    /// `file`
    FILE = "file", None;
    /// `data`
    DATA = "data", None;
    /// `tel`
    TEL = "tel", None;
    /// `gopher`
    GOPHER = "gopher", Some(70);
    /// `nntp`
    NNTP = "nntp", Some(119);
    /// `news`
    NEWS = "news", Some(119);
    /// `telnet`
    TELNET = "telnet", Some(23);
    /// `tn3270`
    TN3270 = "tn3270", Some(23);
    /// `imap`
    IMAP = "imap", Some(143);
    /// `pop`
    POP = "pop", Some(110);
    /// `ldap`
    LDAP = "ldap", Some(389);
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// Returns `None` if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme].
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if is_valid_scheme(s.as_bytes()) {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name.
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

pub(crate) const fn is_valid_scheme(s: &[u8]) -> bool {
    if s.is_empty() || !table::ALPHA.allows(s[0]) {
        return false;
    }
    let mut i = 1;
    while i < s.len() {
        if !table::SCHEME.allows(s[i]) {
            return false;
        }
        i += 1;
    }
    true
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

impl PartialEq<str> for Scheme {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.inner.eq_ignore_ascii_case(other)
    }
}

impl AsRef<str> for Scheme {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// The kind of a [host] subcomponent.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// An IPv4 address.
    Ipv4(Ipv4Addr),
    /// An IPv6 address, written between brackets.
    Ipv6(Ipv6Addr),
    /// An IP address of future version, written between brackets.
    IpvFuture,
    /// A registered name.
    RegName,
}
