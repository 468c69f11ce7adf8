//! Identifier casing conventions.
//!
//! Converts between medial capitals (`myLocalValue`) and underscore
//! separation (`my_local_value`). Neither direction changes the case of the
//! first character; callers that want `my_local_value` from
//! `MyLocalValue` lowercase the result themselves.

/// Split a medial-capitalized identifier into underscore-separated words.
///
/// Acronym runs stay together (`XMLParser` → `XML_Parser`). Existing
/// underscores and non-alphanumeric characters such as `.` pass through.
pub fn camel_to_snake(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut result = String::with_capacity(ident.len() + ident.len() / 2);

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                result.push('_');
            }
        }
        result.push(ch);
    }

    result
}

/// Join underscore-separated words with medial capitals.
///
/// Leading underscores are kept (`_private` stays private-looking).
pub fn snake_to_camel(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len());
    let mut capitalize_next = false;

    for ch in ident.chars() {
        if ch == '_' {
            if result.chars().all(|c| c == '_') {
                result.push('_');
            } else {
                capitalize_next = true;
            }
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// `MAX_VALUE`, `EOF`, `INTEGER_2`: constant-style names.
pub fn is_screaming_snake(ident: &str) -> bool {
    ident.chars().any(|c| c.is_alphabetic())
        && ident
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("myLocalValue"), "my_Local_Value");
        assert_eq!(camel_to_snake("toString"), "to_String");
        assert_eq!(camel_to_snake("value"), "value");
    }

    #[test]
    fn test_camel_to_snake_preserves_first_char() {
        assert_eq!(camel_to_snake("MyLocalValue"), "My_Local_Value");
        assert_eq!(
            camel_to_snake("MyLocalValue").to_lowercase(),
            "my_local_value"
        );
    }

    #[test]
    fn test_camel_to_snake_acronyms_and_digits() {
        assert_eq!(camel_to_snake("XMLParser").to_lowercase(), "xml_parser");
        assert_eq!(
            camel_to_snake("getHTTPResponse").to_lowercase(),
            "get_http_response"
        );
        assert_eq!(camel_to_snake("node2Child").to_lowercase(), "node2_child");
        assert_eq!(camel_to_snake("EOF"), "EOF");
    }

    #[test]
    fn test_camel_to_snake_dotted() {
        assert_eq!(
            camel_to_snake("someObject.someField").to_lowercase(),
            "some_object.some_field"
        );
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("my_local_value"), "myLocalValue");
        assert_eq!(snake_to_camel("My_local_value"), "MyLocalValue");
        assert_eq!(snake_to_camel("_private_field"), "_privateField");
        assert_eq!(snake_to_camel("plain"), "plain");
    }

    #[test]
    fn test_is_screaming_snake() {
        assert!(is_screaming_snake("MAX_VALUE"));
        assert!(is_screaming_snake("EOF"));
        assert!(is_screaming_snake("INTEGER_2"));
        assert!(!is_screaming_snake("Token"));
        assert!(!is_screaming_snake("_2"));
        assert!(!is_screaming_snake("myValue"));
    }
}
