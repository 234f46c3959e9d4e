/// Removes dot segments from a path, following [Section 5.2.4 of RFC 3986].
///
/// Leading `"../"` and `"./"` prefixes are dropped, a path consisting only
/// of `"."` or `".."` becomes empty, a `".."` segment removes the segment
/// before it and a `"."` segment is removed. Excess `".."` segments never
/// climb above the root. The result is idempotent.
///
/// Percent-encoding and letter case are left untouched.
///
/// [Section 5.2.4 of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4
///
/// # Examples
///
/// ```
/// use refuri::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/b/c/.."), "/b/");
/// assert_eq!(remove_dot_segments("/../../g"), "/g");
/// assert_eq!(remove_dot_segments(".."), "");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    loop {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else {
            break;
        }
    }
    if matches!(input, "" | "." | "..") {
        return String::new();
    }

    let mut output = Vec::new();
    let mut last = "";
    for seg in input.split('/') {
        match seg {
            ".." => {
                output.pop();
                if output.is_empty() {
                    // Keep the leading slash.
                    output.push("");
                }
            }
            "." => {}
            _ => output.push(seg),
        }
        last = seg;
    }
    if matches!(last, "." | "..") {
        output.push("");
    }
    output.join("/")
}
