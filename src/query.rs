//! Query tokenizer.

use indexmap::IndexMap;

/// HTML entities decoded in keys and values, with their replacements.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#039;", "'"),
    ("&#39;", "'"),
];

/// Splits a query into an ordered mapping of keys to values.
///
/// Pairs are separated by `'&'`, except where the ampersand begins one of
/// the HTML entities `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#039;` or `&#39;`.
/// Each pair is split at its first `'='`. Pairs without `'='` or with an
/// empty key are skipped. Entities are decoded in keys and values, and
/// percent-encoding is left as is. A later pair overwrites the value of an
/// earlier pair with the same key but keeps its position.
///
/// # Examples
///
/// ```
/// use refuri::query::parse_query;
///
/// let map = parse_query("a=1&b=x=y&flag&=z&a=2&c=&amp;");
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert_eq!(map["a"], "2");
/// assert_eq!(map["b"], "x=y");
/// assert_eq!(map["c"], "&");
/// ```
#[must_use]
pub fn parse_query(query: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for pair in split_pairs(query) {
        if let Some((key, value)) = pair.split_once('=') {
            if !key.is_empty() {
                map.insert(decode_entities(key), decode_entities(value));
            }
        }
    }
    map
}

fn split_pairs(query: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(query);
    core::iter::from_fn(move || {
        let s = rest?;
        let mut from = 0;
        loop {
            match s[from..].find('&') {
                Some(i) => {
                    let i = from + i;
                    if starts_entity(&s[i..]) {
                        from = i + 1;
                        continue;
                    }
                    rest = Some(&s[i + 1..]);
                    return Some(&s[..i]);
                }
                None => {
                    rest = None;
                    return Some(s);
                }
            }
        }
    })
}

fn starts_entity(s: &str) -> bool {
    ENTITIES.iter().any(|(entity, _)| s.starts_with(entity))
}

fn decode_entities(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find('&') {
        buf.push_str(&rest[..i]);
        rest = &rest[i..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                buf.push_str(ch);
                rest = &rest[entity.len()..];
            }
            None => {
                buf.push('&');
                rest = &rest[1..];
            }
        }
    }
    buf.push_str(rest);
    buf
}
