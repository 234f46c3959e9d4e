use refuri::{Part, Uri};

#[test]
fn with_single_part() {
    let u = Uri::parse("http://example.com/a?q#f");

    assert_eq!(u.with("scheme", Some("https")).to_string(), "https://example.com/a?q#f");
    assert_eq!(u.with("host", Some("h.test")).to_string(), "http://h.test/a?q#f");
    assert_eq!(u.with("port", Some("81")).to_string(), "http://example.com:81/a?q#f");
    assert_eq!(u.with("user", Some("u")).to_string(), "http://u@example.com/a?q#f");
    assert_eq!(u.with(Part::Query, None).to_string(), "http://example.com/a#f");
    assert_eq!(u.with(Part::Fragment, Some("")).to_string(), "http://example.com/a?q#");
    assert_eq!(u.with("path", None).path(), "");
    assert_eq!(u.with("scheme", None).to_string(), "//example.com/a?q#f");
}

#[test]
fn with_never_mutates() {
    let u = Uri::parse("http://example.com/a");
    let copy = u.clone();
    let _ = u.with("path", Some("/b"));
    let _ = u.with_all([("host", Some("x")), ("query", Some("y"))]);
    let _ = u.without(["host"]);
    assert_eq!(u, copy);
}

#[test]
fn with_ignores_what_it_cannot_set() {
    let u = Uri::parse("http://u@example.com/a");

    assert_eq!(u.with("hostname", Some("x")), u);
    assert_eq!(u.with("Host", Some("x")), u);
    assert_eq!(u.with("userinfo", Some("v:w")), u);
    assert_eq!(u.with("scheme", Some("1http")), u);
    assert_eq!(u.with("scheme", Some("")), u);
}

#[test]
fn with_authority() {
    let u = Uri::parse("http://u@example.com:8080/a");

    let v = u.with("authority", Some("v:secret@h:81"));
    assert_eq!(v.user(), Some("v"));
    assert_eq!(v.pass(), None);
    assert_eq!(v.host(), Some("h"));
    assert_eq!(v.port(), Some("81"));
    assert_eq!(v.path(), "/a");

    let v = u.with("authority", Some("h"));
    assert_eq!(v.user(), None);
    assert_eq!(v.port(), None);
    assert_eq!(v.to_string(), "http://h/a");

    let v = u.with(Part::Authority, None);
    assert_eq!(v.host(), None);
    assert_eq!(v.user(), None);
    assert_eq!(v.to_string(), "http:/a");
}

#[test]
fn with_all_applies_authority_last() {
    let u = Uri::parse("http://example.com/a");

    let v = u.with_all([
        ("authority", Some("h:81")),
        ("host", Some("ignored")),
        ("path", Some("/b")),
    ]);
    assert_eq!(v.to_string(), "http://h:81/b");

    let v = u.with_all([
        ("scheme", Some("https")),
        ("nope", Some("x")),
        ("query", None),
        ("fragment", Some("top")),
    ]);
    assert_eq!(v.to_string(), "https://example.com/a#top");

    let v = u.with_all(Vec::<(&str, Option<&str>)>::new());
    assert_eq!(v, u);
}

#[test]
fn without() {
    let u = Uri::parse_with_password("http://u:p@h:81/a?q#f");

    assert_eq!(u.without(["query", "fragment"]).to_string(), "http://u:p@h:81/a");
    assert_eq!(u.without(["path"]).to_string(), "http://u:p@h:81?q#f");
    assert_eq!(u.without(["port"]).to_string(), "http://u:p@h/a?q#f");
    assert_eq!(u.without(["pass"]).to_string(), "http://u@h:81/a?q#f");
    assert_eq!(u.without(["nope"]), u);
    assert_eq!(u.without(Vec::<&str>::new()), u);
}

#[test]
fn without_host_removes_authority() {
    let u = Uri::parse_with_password("http://u:p@h:81/a?q#f");

    let v = u.without(["host"]);
    assert_eq!(v.user(), None);
    assert_eq!(v.pass(), None);
    assert_eq!(v.host(), None);
    assert_eq!(v.port(), None);
    assert_eq!(v.to_string(), "http:/a?q#f");

    assert_eq!(u.without([Part::Host]), v);
    assert_eq!(u.without(["authority"]), v);
}

#[test]
fn lenient_with_strict_get() {
    let u = Uri::parse("http://h/");
    assert_eq!(u.with("bogus", Some("x")), u);
    assert!(u.get("bogus").is_err());
}
