//! Target backends.
//!
//! Each backend implements [`Translator`](crate::traits::Translator) and is
//! selected through [`Target`](crate::registry::Target).

pub mod java;
pub mod python;
pub mod rust;

pub use java::JavaTranslator;
pub use python::PythonTranslator;
pub use rust::RustTranslator;

/// Escape text for a quoted literal delimited by `quote`.
pub(crate) fn escape_text(s: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// `s` as a literal delimited by `quote` on both sides.
pub(crate) fn quote(s: &str, quote: char) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(quote);
    quoted.push_str(&escape_text(s, quote));
    quoted.push(quote);
    quoted
}

/// Split a numeric literal into digits and its width suffix (`10L` →
/// `("10", Some('L'))`). Hex digits are never mistaken for suffixes.
pub(crate) fn split_numeric_suffix(text: &str) -> (&str, Option<char>) {
    let is_hex = text.starts_with("0x") || text.starts_with("0X");
    match text.chars().last() {
        Some(c @ ('L' | 'l')) => (&text[..text.len() - 1], Some(c)),
        Some(c @ ('f' | 'F' | 'd' | 'D')) if !is_hex => (&text[..text.len() - 1], Some(c)),
        _ => (text, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("say \"hi\"\n", '"'), "say \\\"hi\\\"\\n");
        assert_eq!(escape_text("it's", '\''), "it\\'s");
        assert_eq!(escape_text("it's", '"'), "it's");
        assert_eq!(escape_text("a\\b", '"'), "a\\\\b");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("hi", '"'), "\"hi\"");
        assert_eq!(quote("'", '\''), "'\\''");
    }

    #[test]
    fn test_split_numeric_suffix() {
        assert_eq!(split_numeric_suffix("10L"), ("10", Some('L')));
        assert_eq!(split_numeric_suffix("1.5f"), ("1.5", Some('f')));
        assert_eq!(split_numeric_suffix("2.0d"), ("2.0", Some('d')));
        assert_eq!(split_numeric_suffix("0xFF"), ("0xFF", None));
        assert_eq!(split_numeric_suffix("0xFFL"), ("0xFF", Some('L')));
        assert_eq!(split_numeric_suffix("42"), ("42", None));
    }
}
