//! Reference scanning through the public API.

use envexpand::{ReferenceCache, SpanSource, Uncached, scan};

fn names(template: &str) -> Vec<&str> {
    scan(template).iter().map(|span| span.name(template)).collect()
}

#[test]
fn test_reference_names() {
    let cases: &[(&str, &[&str])] = &[
        ("C${B}", &["B"]),
        ("C${B}D", &["B"]),
        ("C${B}D${E}", &["B", "E"]),
        ("C${B}D${E}F", &["B", "E"]),
    ];

    for (template, expected) in cases {
        assert_eq!(names(template), *expected, "template {template:?}");
    }
}

#[test]
fn test_malformed_syntax() {
    let cases: &[(&str, &[&str])] = &[
        ("C${B", &[]),
        ("C$B}", &[]),
        ("C${B}}}", &["B"]),
        ("C$B${C}", &["C"]),
        ("C${B${C}}", &["B${C"]),
        ("C\\${B}${C}", &["C"]),
    ];

    for (template, expected) in cases {
        assert_eq!(names(template), *expected, "template {template:?}");
    }
}

#[test]
fn test_span_invariants() {
    let templates = [
        "",
        "plain",
        "${A}${B}",
        "x${}y${LONG_NAME}z",
        "\\${A}${B}\\${C}",
        "${A${B}}${C}",
        "ünï${CÖDE}ß",
    ];

    for template in templates {
        let spans = scan(template);
        let mut previous_end = 0;

        for span in &spans {
            assert!(span.outer_begin >= previous_end, "overlap in {template:?}");
            assert!(span.outer_begin < span.name_begin);
            assert!(span.name_begin <= span.name_end);
            assert!(span.name_end < span.outer_end);
            assert!(span.outer_end <= template.len());
            assert!(span.token(template).starts_with("${"));
            assert!(span.token(template).ends_with('}'));
            previous_end = span.outer_end;
        }
    }
}

#[test]
fn test_cached_spans_match_fresh_scan() {
    let cache = ReferenceCache::new();
    let template = "postgres://${USER}:${PASSWORD}@${HOST}";

    let first = cache.spans(template);
    let second = cache.spans(template);

    assert_eq!(&*first, scan(template).as_slice());
    assert_eq!(&*first, &*Uncached.spans(template));
    assert_eq!(first, second);
    assert_eq!(cache.stats(), (1, 1));
}
