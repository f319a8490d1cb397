//! HTML escaping for text content.
//!
//! Every value sourced from the environment or the query string passes
//! through `escape_html` before interpolation; nothing reaches the
//! document unescaped.

/// Escape a string for embedding inside HTML text content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entities. Total:
/// never fails, never drops characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the five entities produced by [`escape_html`].
///
/// Inverse of `escape_html` on its own output; unknown entities pass
/// through untouched.
pub fn unescape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let mut matched = false;
        for (entity, c) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
        ] {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(c);
                rest = tail;
                matched = true;
                break;
            }
        }
        if !matched {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_safe_text_passes_through() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_escaped_output_has_no_raw_markup() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn test_round_trip_recovers_input() {
        let inputs = [
            r#"a & b < c > d " e ' f"#,
            "&&&&",
            "<<>>",
            "no special chars",
            "",
            "unicode: héllo ☃",
        ];
        for input in inputs {
            assert_eq!(unescape_html(&escape_html(input)), input);
        }
    }

    #[test]
    fn test_unescape_leaves_unknown_entities() {
        assert_eq!(unescape_html("&nbsp;&amp;"), "&nbsp;&");
    }
}
