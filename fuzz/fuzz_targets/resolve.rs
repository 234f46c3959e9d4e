#![no_main]
use libfuzzer_sys::fuzz_target;
use refuri::{remove_dot_segments, Uri};

fuzz_target!(|data: (&str, &str)| {
    let (base, r) = (Uri::parse(data.0), Uri::parse(data.1));
    let t = base.merge(&r);

    assert_eq!(t.fragment(), r.fragment());
    if r.scheme().is_some() {
        assert_eq!(t.scheme(), r.scheme());
        assert_eq!(t.path(), remove_dot_segments(r.path()));
    } else {
        assert_eq!(t.scheme(), base.scheme());
    }
    if r.scheme().is_some() || r.host().is_some() || !r.path().is_empty() {
        assert_eq!(t.query(), r.query());
        assert_eq!(remove_dot_segments(t.path()), t.path());
    } else {
        assert_eq!(t.path(), base.path());
    }

    // Resolution is pure.
    assert_eq!(base.merge(&r), t);
});
