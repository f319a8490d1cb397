//! Query-string decoding.
//!
//! A CGI program receives the query string raw in `QUERY_STRING` and
//! decodes it itself: split on `&`, split each segment on the first
//! `=`, decode `+` as space and percent-escapes as bytes. Decoding is
//! total; malformed escapes and invalid UTF-8 degrade lossily instead
//! of failing the request.

use percent_encoding::percent_decode;

/// Decoded query parameters in order of appearance.
///
/// Values are opaque strings. A repeated key overwrites its value in
/// place, keeping the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw query string.
    pub fn parse(raw: &str) -> Self {
        let mut params: Vec<(String, String)> = Vec::new();

        for segment in raw.split('&') {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = match segment.split_once('=') {
                Some((k, v)) => (decode_component(k), decode_component(v)),
                // `?flag` parses as an empty-valued parameter.
                None => (decode_component(segment), String::new()),
            };
            match params.iter_mut().find(|(k, _)| *k == key) {
                Some((_, existing)) => *existing = value,
                None => params.push((key, value)),
            }
        }

        Self { params }
    }

    /// Iterate `(key, value)` pairs in appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the query string carried no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Decode one `application/x-www-form-urlencoded` component.
fn decode_component(component: &str) -> String {
    let plus_decoded = component.replace('+', " ");
    percent_decode(plus_decoded.as_bytes())
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Parsing Tests ===

    #[test]
    fn test_parse_simple_pairs() {
        let params = QueryParams::parse("a=1&b=2");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn test_parse_preserves_appearance_order() {
        let params = QueryParams::parse("z=1&a=2&m=3");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_key_without_value() {
        let params = QueryParams::parse("flag&a=1");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_empty_segments_skipped() {
        let params = QueryParams::parse("&&a=1&&");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_repeated_key_overwrites_in_place() {
        let params = QueryParams::parse("a=1&b=2&a=3");
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    // === Decoding Tests ===

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse("name=hello%20world&sym=%26%3D");
        assert_eq!(params.get("name"), Some("hello world"));
        assert_eq!(params.get("sym"), Some("&="));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = QueryParams::parse("q=rust+cgi");
        assert_eq!(params.get("q"), Some("rust cgi"));
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let params = QueryParams::parse("expr=a=b");
        assert_eq!(params.get("expr"), Some("a=b"));
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        let params = QueryParams::parse("raw=%FF%FE");
        assert_eq!(params.get("raw"), Some("\u{FFFD}\u{FFFD}"));
    }

    #[test]
    fn test_markup_survives_as_opaque_text() {
        let params = QueryParams::parse("a=1&b=<script>");
        assert_eq!(params.get("b"), Some("<script>"));
    }
}
