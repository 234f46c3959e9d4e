use refuri::{
    error::ValidationErrorKind,
    ip::{
        classify_host, is_host_ip_literal, is_ipv4_address, is_ipv6_address, is_ipv_future,
        is_port_in_range, is_reg_name, parse_ipv4, parse_ipv6,
    },
    HostKind, Part, Uri,
};
use std::net::{Ipv4Addr, Ipv6Addr};

#[test]
fn ipv6() {
    for s in [
        "::",
        "::1",
        "1::",
        "1:2:3:4:5:6:7:8",
        "1:2:3:4:5:6::",
        "1::2",
        "2001:db8::7",
        "FEDC:BA98:7654:3210:FEDC:BA98:7654:3210",
        "::ffff:192.0.2.128",
        "1:2:3:4:5:6:1.2.3.4",
        "::1.2.3.4",
    ] {
        assert!(is_ipv6_address(s), "{s:?}");
    }
    for s in [
        "",
        ":",
        ":1",
        "1:",
        ":::",
        "1:::2",
        "1::2::3",
        "1:2:3:4:5:6:7:8:9",
        "1:2:3:4:5:6:7",
        "12345::",
        "g::",
        "1:2:3:4:5:6:7:1.2.3.4",
        "::1.2.3",
        "::256.0.0.1",
        "[::1]",
    ] {
        assert!(!is_ipv6_address(s), "{s:?}");
    }

    assert_eq!(
        parse_ipv6("::ffff:192.0.2.128"),
        Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x0280))
    );
}

#[test]
fn ipv4() {
    assert!(is_ipv4_address("192.0.2.16"));
    assert!(!is_ipv4_address("192.0.2"));
    assert!(!is_ipv4_address("192.0.2.016"));
    assert!(!is_ipv4_address("192.0.2.256"));
    assert!(!is_ipv4_address(" 192.0.2.1"));
}

#[test]
fn ipv4_high_octets() {
    for s in [
        "255.255.255.255",
        "250.251.252.253",
        "208.209.199.100",
        "249.99.10.0",
    ] {
        assert!(is_ipv4_address(s), "{s:?}");
    }
    assert_eq!(
        parse_ipv4("255.209.250.108"),
        Some(Ipv4Addr::new(255, 209, 250, 108))
    );
    assert_eq!(
        parse_ipv6("::ffff:10.0.0.209"),
        Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0x0a00, 0x00d1))
    );
    assert!(Uri::parse("http://[::ffff:10.0.0.209]/").validate().is_ok());
    assert_eq!(
        Uri::parse("http://255.255.255.255/").host_kind(),
        Some(HostKind::Ipv4(Ipv4Addr::BROADCAST))
    );
}

#[test]
fn ipv_future_and_reg_name() {
    assert!(is_ipv_future("v7.fe80::abcd"));
    assert!(is_ipv_future("VF.x"));
    assert!(!is_ipv_future("v.x"));
    assert!(!is_ipv_future("v7."));
    assert!(!is_ipv_future("v7x"));
    assert!(!is_ipv_future("w7.x"));

    assert!(is_reg_name(""));
    assert!(is_reg_name("example.com"));
    assert!(is_reg_name("ex%41mple"));
    assert!(is_reg_name("a!$&'()*+,;=b"));
    assert!(!is_reg_name("a b"));
    assert!(!is_reg_name("a:b"));
    assert!(!is_reg_name("%4"));
    assert!(!is_reg_name("%zz"));
}

#[test]
fn ip_literal() {
    assert_eq!(is_host_ip_literal("[::1]"), Some("::1"));
    assert_eq!(is_host_ip_literal("[v1.x]"), Some("v1.x"));
    assert_eq!(is_host_ip_literal("[]"), None);
    assert_eq!(is_host_ip_literal("[::1"), None);
    assert_eq!(is_host_ip_literal("::1]"), None);
    assert_eq!(is_host_ip_literal("[[::1]]"), None);
    assert_eq!(is_host_ip_literal("example.com"), None);
}

#[test]
fn ports() {
    assert!(!is_port_in_range(0));
    assert!(is_port_in_range(1));
    assert!(is_port_in_range(65535));
    assert!(!is_port_in_range(65536));
}

#[test]
fn host_kinds() {
    assert_eq!(
        classify_host("127.0.0.1"),
        Some(HostKind::Ipv4(Ipv4Addr::LOCALHOST))
    );
    assert_eq!(
        classify_host("[::1]"),
        Some(HostKind::Ipv6(Ipv6Addr::LOCALHOST))
    );
    assert_eq!(classify_host("[v1.x]"), Some(HostKind::IpvFuture));
    assert_eq!(classify_host("example.com"), Some(HostKind::RegName));
    assert_eq!(classify_host("256.0.0.1"), Some(HostKind::RegName));
    assert_eq!(classify_host(""), Some(HostKind::RegName));
    assert_eq!(classify_host("[::1"), None);
    assert_eq!(classify_host("[example.com]"), None);
    assert_eq!(classify_host("a b"), None);

    assert_eq!(Uri::parse("a/b").host_kind(), None);
    assert_eq!(
        Uri::parse("http://[::1]:80/").host_kind(),
        Some(HostKind::Ipv6(Ipv6Addr::LOCALHOST))
    );
}

#[test]
fn validate() {
    for s in [
        "http://example.com/",
        "http://u:p%20w@[::1]:65535/",
        "file:///etc/hosts",
        "mailto:a@b",
        "a/b",
    ] {
        assert!(Uri::parse_with_password(s).validate().is_ok(), "{s:?}");
    }

    let e = Uri::parse("http://exa mple.com/").validate().unwrap_err();
    assert_eq!(e.part(), Part::Host);
    assert_eq!(e.kind(), ValidationErrorKind::InvalidHost);

    // An unparseable port is kept in the host.
    let e = Uri::parse("http://h:8x/").validate().unwrap_err();
    assert_eq!(e.kind(), ValidationErrorKind::InvalidHost);

    let e = Uri::parse("http://h:0/").validate().unwrap_err();
    assert_eq!(e.part(), Part::Port);
    assert_eq!(e.kind(), ValidationErrorKind::PortOutOfRange);

    let e = Uri::parse("http://h:99999999999/").validate().unwrap_err();
    assert_eq!(e.kind(), ValidationErrorKind::PortOutOfRange);

    let e = Uri::parse("http://h/").with("port", Some("8x")).validate().unwrap_err();
    assert_eq!(e.kind(), ValidationErrorKind::InvalidPort);

    let e = Uri::parse("http://h/").with("user", Some("a b")).validate().unwrap_err();
    assert_eq!(e.part(), Part::User);
    assert_eq!(e.kind(), ValidationErrorKind::InvalidUserinfo);
    assert_eq!(e.to_string(), "invalid character in user");
}

#[test]
fn default_ports() {
    assert_eq!(Uri::parse("http://h/").port_or_default(), Some(80));
    assert_eq!(Uri::parse("HTTPS://h/").port_or_default(), Some(443));
    assert_eq!(Uri::parse("ldap://h/").port_or_default(), Some(389));
    assert_eq!(Uri::parse("http://h:8080/").port_or_default(), Some(8080));
    assert_eq!(Uri::parse("x://h/").port_or_default(), None);
    assert_eq!(Uri::parse("//h/").port_or_default(), None);
}

#[test]
fn predicates() {
    let u = Uri::parse("http://h/a");
    assert!(u.is_absolute_uri());
    assert!(u.is_absolute_path());
    assert!(!u.is_relative_path());
    assert!(!u.is_network_path());
    assert!(!u.is_relative_reference());

    assert!(!Uri::parse("http://h/a#f").is_absolute_uri());

    let u = Uri::parse("//h/a");
    assert!(u.is_network_path());
    assert!(!u.is_absolute_path());
    assert!(u.is_relative_path());
    assert!(u.is_relative_reference());

    let u = Uri::parse("/a");
    assert!(u.is_absolute_path());
    assert!(u.is_relative_reference());

    let u = Uri::parse("a/b");
    assert!(u.is_relative_path());
    assert!(u.is_relative_reference());
    assert!(!u.is_absolute_uri());
}

#[test]
fn email() {
    assert!(Uri::parse("mailto:someone").is_email());
    assert!(Uri::parse("MailTo:someone").is_email());
    assert!(Uri::parse("someone@example.com").is_email());
    assert!(!Uri::parse("http://u@h/").is_email());
    assert!(!Uri::parse("http://h/a").is_email());
}
