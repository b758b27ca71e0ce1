use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters kept literal by JavaScript's `encodeURIComponent`: ALPHA,
/// DIGIT, and `- _ . ! ~ * ' ( )`. Everything else is `%XX`-escaped
/// (UTF-8 bytes for non-ASCII).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single parameter value, then rewrite `%20` to `+`.
///
/// A literal `+` in the input encodes to `%2B` first, so the rewrite is
/// unambiguous.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Canonicalize query parameters: keys sorted ascending by byte value,
/// values encoded via [`encode_component`], pairs joined with `&`.
///
/// The result is covered by the request signature and appended verbatim to
/// the request URL, so both always agree. An empty parameter list
/// canonicalizes to the empty string.
pub fn encode_query(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn keys_sort_by_byte_value() {
        let encoded = encode_query(&params(&[("b", "2"), ("a", "1"), ("Z", "0")]));
        assert_eq!(encoded, "Z=0&a=1&b=2");
    }

    #[test]
    fn insertion_order_does_not_change_output() {
        let one = encode_query(&params(&[("status", "SUBSCRIBED"), ("limit", "10")]));
        let two = encode_query(&params(&[("limit", "10"), ("status", "SUBSCRIBED")]));
        assert_eq!(one, two);
        assert_eq!(one, "limit=10&status=SUBSCRIBED");
    }

    #[test]
    fn spaces_encode_as_plus_never_percent_20() {
        let encoded = encode_query(&params(&[("query", "ada lovelace")]));
        assert_eq!(encoded, "query=ada+lovelace");
        assert!(!encoded.contains("%20"));
    }

    #[test]
    fn literal_plus_is_escaped_before_the_space_rewrite() {
        assert_eq!(encode_component("a+b c"), "a%2Bb+c");
    }

    #[test]
    fn unreserved_marks_stay_literal() {
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(encode_component("2024-01-02 03:04:05"), "2024-01-02+03%3A04%3A05");
    }

    #[test]
    fn non_ascii_encodes_utf8_bytes() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn empty_params_encode_to_empty_string() {
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn keys_are_emitted_raw() {
        // Only values pass through the component encoder.
        let encoded = encode_query(&params(&[("tag_name", "vip customers")]));
        assert_eq!(encoded, "tag_name=vip+customers");
    }
}
