use criterion::{black_box, criterion_group, criterion_main, Criterion};
use refuri::{ip, query::parse_query, remove_dot_segments, Uri};

criterion_group!(
    benches,
    bench_parse,
    bench_classify_host,
    bench_normalize,
    bench_resolve,
    bench_to_string,
    bench_to_string_with,
    bench_parse_query,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com:8443/search?q=%E6%B5%8B%E8%AF%95#fragment";
const HOST_CASE: &str = "[2001:db8:85a3::8a2e:370:7334]";
const NORMALIZE_CASE: &str = "/a/./b/../b/%63/./../../d";
const RESOLVE_CASE_BASE: &str = "http://example.com/foo/bar";
const RESOLVE_CASE_REF: &str = "../baz";
const QUERY_CASE: &str = "a=1&b=two&c=&amp;&d=%20&e=x=y";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Uri::parse(black_box(PARSE_CASE))));
}

fn bench_classify_host(c: &mut Criterion) {
    c.bench_function("classify_host", |b| {
        b.iter(|| ip::classify_host(black_box(HOST_CASE)))
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| remove_dot_segments(black_box(NORMALIZE_CASE)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let base = Uri::parse(RESOLVE_CASE_BASE);
    c.bench_function("resolve", |b| {
        b.iter(|| base.merge(black_box(RESOLVE_CASE_REF)))
    });
}

fn bench_to_string(c: &mut Criterion) {
    let uri = Uri::parse(PARSE_CASE);
    c.bench_function("to_string", |b| b.iter(|| black_box(&uri).to_string()));
}

fn bench_to_string_with(c: &mut Criterion) {
    let uri = Uri::parse(PARSE_CASE);
    c.bench_function("to_string_with", |b| {
        b.iter(|| black_box(&uri).to_string_with(["scheme", "authority", "path"]))
    });
}

fn bench_parse_query(c: &mut Criterion) {
    c.bench_function("parse_query", |b| {
        b.iter(|| parse_query(black_box(QUERY_CASE)))
    });
}
