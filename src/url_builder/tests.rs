//! Unit tests for url_builder module.

use super::*;

const BASE: &str = "https://example.test";

// ============================================================================
// build_url Tests
// ============================================================================

#[test]
fn test_build_url_scalar_options_in_insertion_order() {
    let options = RequestOptions::new()
        .with("apikey", "abc123")
        .with("state", "unread")
        .with("count", 2);

    let url = build_url(BASE, "v2", "get", &options);

    assert_eq!(
        url,
        "https://example.test/v2/get?apikey=abc123&state=unread&count=2"
    );
}

#[test]
fn test_build_url_one_segment_per_scalar_entry() {
    let options: RequestOptions = (0..5).map(|i| (format!("k{}", i), i)).collect();

    let url = build_url(BASE, "v2", "stats", &options);
    let query = url.split_once('?').unwrap().1;
    let segments: Vec<&str> = query.split('&').collect();

    assert_eq!(segments, vec!["k0=0", "k1=1", "k2=2", "k3=3", "k4=4"]);
}

#[test]
fn test_build_url_expands_lists() {
    let options = RequestOptions::new()
        .with("apikey", "k")
        .with("tags", vec!["rust", "http", "api"]);

    let url = build_url(BASE, "v2", "add", &options);

    assert_eq!(
        url,
        "https://example.test/v2/add?apikey=k&tags[]=rust&tags[]=http&tags[]=api"
    );
}

#[test]
fn test_build_url_list_emits_n_segments() {
    let values: Vec<String> = (0..7).map(|i| format!("v{}", i)).collect();
    let options = RequestOptions::new().with("ids", values.clone());

    let url = build_url(BASE, "v2", "send", &options);
    let query = url.split_once('?').unwrap().1;
    let segments: Vec<&str> = query.split('&').collect();

    assert_eq!(segments.len(), 7);
    for (segment, value) in segments.iter().zip(&values) {
        assert_eq!(*segment, format!("ids[]={}", value));
    }
}

#[test]
fn test_build_url_empty_list_emits_nothing() {
    let options = RequestOptions::new()
        .with("a", "1")
        .with("tags", Vec::<String>::new())
        .with("b", "2");

    assert_eq!(
        build_url(BASE, "v2", "get", &options),
        "https://example.test/v2/get?a=1&b=2"
    );
}

#[test]
fn test_build_url_empty_options_keeps_trailing_question_mark() {
    let url = build_url(BASE, "v2", "api", &RequestOptions::new());

    assert_eq!(url, "https://example.test/v2/api?");
}

#[test]
fn test_build_url_percent_encodes_values() {
    let options = RequestOptions::new()
        .with("url", "https://example.com/a b?x=1&y=2")
        .with("title", "Café #1");

    let url = build_url(BASE, "v2", "add", &options);

    assert_eq!(
        url,
        "https://example.test/v2/add?url=https%3A%2F%2Fexample.com%2Fa+b%3Fx%3D1%26y%3D2&title=Caf%C3%A9+%231"
    );
}

#[test]
fn test_build_url_encodes_list_elements() {
    let options = RequestOptions::new().with("q", vec!["a&b", "c=d"]);

    assert_eq!(
        build_url(BASE, "v2", "get", &options),
        "https://example.test/v2/get?q[]=a%26b&q[]=c%3Dd"
    );
}

#[test]
fn test_build_url_passes_endpoint_through() {
    let url = build_url(BASE, "v2", "does/not/exist", &RequestOptions::new());

    assert_eq!(url, "https://example.test/v2/does/not/exist?");
}

// ============================================================================
// RequestOptions Tests
// ============================================================================

#[test]
fn test_insert_replaces_in_place() {
    let mut options = RequestOptions::new().with("a", "1").with("b", "2");

    let previous = options.insert("a", "3");

    assert_eq!(previous, Some(OptionValue::Scalar("1".to_string())));
    assert_eq!(options.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(options.to_query_string(), "a=3&b=2");
}

#[test]
fn test_insert_first_if_absent() {
    let mut options = RequestOptions::new().with("state", "read");

    assert!(options.insert_first_if_absent("apikey", "k"));
    assert!(!options.insert_first_if_absent("apikey", "other"));

    assert_eq!(options.to_query_string(), "apikey=k&state=read");
}

#[test]
fn test_remove_and_len() {
    let mut options = RequestOptions::from([("a", "1"), ("b", "2")]);
    assert_eq!(options.len(), 2);

    assert_eq!(options.remove("a"), Some(OptionValue::from("1")));
    assert_eq!(options.remove("a"), None);
    assert_eq!(options.len(), 1);
    assert!(!options.is_empty());
    assert!(options.contains_key("b"));
}

#[test]
fn test_option_value_conversions() {
    assert_eq!(OptionValue::from(42u64), OptionValue::Scalar("42".to_string()));
    assert_eq!(OptionValue::from(-3i32), OptionValue::Scalar("-3".to_string()));
    assert_eq!(
        OptionValue::from(&["x", "y"][..]),
        OptionValue::List(vec!["x".to_string(), "y".to_string()])
    );
}
