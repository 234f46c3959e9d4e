#![no_main]
use libfuzzer_sys::fuzz_target;
use refuri::{Part, Uri};

fuzz_target!(|data: &str| {
    let u = Uri::parse_with_password(data);
    let s = u.to_string();
    let u2 = Uri::parse_with_password(&s);

    assert_eq!(u.scheme(), u2.scheme());
    assert_eq!(u.host().is_some(), u2.host().is_some());
    assert_eq!(u.user(), u2.user());
    assert_eq!(u.pass(), u2.pass());
    assert_eq!(u.query(), u2.query());
    assert_eq!(u.fragment(), u2.fragment());

    // Without backslashes, no separators are invented.
    if !data.contains('\\') {
        assert!(s.len() <= data.len());
    }

    if !u.path().starts_with("//") {
        let mut sp = u.scheme().map_or(String::new(), |s| format!("{s}:"));
        sp.push_str(u.path());
        assert_eq!(u.to_string_with(["scheme", "path"]), sp);
    }

    for part in Part::CANONICAL {
        assert_eq!(u.get(part).unwrap().is_some(), u.to_map()[&part].is_some());
    }
    let _ = u.validate();
    let _ = u.query_as_map();
});
