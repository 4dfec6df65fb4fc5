//! Query-string encoding and decoding

/// Split a query string into decoded key/value pairs
///
/// A leading `?` is ignored, `+` decodes to a space, and a value that is not
/// valid percent-encoding is kept as written.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    query
        .trim()
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Join pairs into `?k=v&...`, or an empty string when there are none
pub fn build_query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// First value for a key
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_values() {
        let pairs = parse_query_string("?q=web+design&tag=c%2B%2B&empty=&flag");
        assert_eq!(first_value(&pairs, "q"), Some("web design"));
        assert_eq!(first_value(&pairs, "tag"), Some("c++"));
        assert_eq!(first_value(&pairs, "empty"), Some(""));
        assert_eq!(first_value(&pairs, "flag"), Some(""));
        assert_eq!(first_value(&pairs, "missing"), None);
    }

    #[test]
    fn test_parse_keeps_first_duplicate() {
        let pairs = parse_query_string("page=2&page=5");
        assert_eq!(first_value(&pairs, "page"), Some("2"));
    }

    #[test]
    fn test_parse_tolerates_bad_escapes() {
        let pairs = parse_query_string("q=100%");
        assert_eq!(first_value(&pairs, "q"), Some("100%"));
    }

    #[test]
    fn test_build_encodes_values() {
        let qs = build_query_string(&[("category", "Web Design".into()), ("q", "a&b".into())]);
        assert_eq!(qs, "?category=Web%20Design&q=a%26b");
        assert_eq!(build_query_string(&[]), "");
    }
}
