//! Reference resolution.

use crate::{map, normalize::remove_dot_segments, Part, Uri};

/// Resolves `r` against `base`, following Sections 5.2.2 and 5.2.3 of RFC 3986.
///
/// A reference with a scheme or an authority replaces the base from that
/// point on. Otherwise the base's scheme and authority are kept, and the
/// reference's path is merged with the base path. An empty reference path
/// keeps the base path, and then the base query too unless the reference
/// has one.
pub(crate) fn resolve(base: &Uri, r: Uri) -> Uri {
    if r.scheme.is_some() {
        return Uri {
            path: remove_dot_segments(&r.path),
            ..r
        };
    }
    if r.host.is_some() {
        return Uri {
            scheme: base.scheme.clone(),
            path: remove_dot_segments(&r.path),
            ..r
        };
    }

    let (path, query) = if r.path.is_empty() {
        (base.path.clone(), r.query.or_else(|| base.query.clone()))
    } else {
        let merged = if r.path.starts_with('/') {
            r.path
        } else if base.host.is_some() && base.path.is_empty() {
            format!("/{}", r.path)
        } else {
            match base.path.rfind('/') {
                Some(i) => format!("{}{}", &base.path[..=i], r.path),
                None => r.path,
            }
        };
        (remove_dot_segments(&merged), r.query)
    };

    Uri::from_map(map::merge(
        map::diff(base.to_map(), &[Part::Path, Part::Query, Part::Fragment]),
        [
            (Part::Path, Some(path)),
            (Part::Query, query),
            (Part::Fragment, r.fragment),
        ],
    ))
}
