//! Token parser for `{{variable}}` syntax
//!
//! Scans templates left to right and extracts well-formed tokens with their
//! byte spans. Anything that is not a well-formed token is left for the
//! caller to copy through as literal text.

use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A `{{name}}` token found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRef {
    /// The variable name as written, trimmed of surrounding whitespace.
    pub name: String,

    /// Byte range of the whole token, delimiters included.
    pub span: Range<usize>,
}

impl TokenRef {
    /// Creates a new token reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Registry lookup key; names are case-insensitive.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Parses a template and extracts all well-formed tokens.
///
/// A token is the trimmed text between `{{` and `}}` and must be a valid
/// variable name. Unclosed openers, empty bodies and bodies that are not
/// names are not tokens; the parser moves one character past such an opener
/// and keeps scanning, so `{{{scene}}` still yields `scene`.
///
/// # Examples
///
/// ```
/// use rendernames_application::variable_resolver::parse_tokens;
///
/// let tokens = parse_tokens("{{scene}}/{{ Camera }}_{{unclosed");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].name, "scene");
/// assert_eq!(tokens[1].name, "Camera");
/// ```
#[must_use]
pub fn parse_tokens(input: &str) -> Vec<TokenRef> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = input[cursor..].find(OPEN) {
        let start = cursor + found;
        let body_start = start + OPEN.len();

        let Some(close) = input[body_start..].find(CLOSE) else {
            // No closer anywhere after this point: the rest is literal.
            break;
        };
        let body_end = body_start + close;
        let name = input[body_start..body_end].trim();

        if is_valid_variable_name(name) {
            let end = body_end + CLOSE.len();
            tokens.push(TokenRef::new(name, start..end));
            cursor = end;
        } else {
            // `{` is one byte, so this stays on a char boundary.
            cursor = start + 1;
        }
    }

    tokens
}

/// Validates a variable name.
/// Valid names: letters, digits, underscore and hyphen, not starting with a digit or hyphen.
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Returns true if the input contains at least one well-formed token.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    !parse_tokens(input).is_empty()
}

/// Extracts just the token names, as written, in order of appearance.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_tokens(input).into_iter().map(|t| t.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_token() {
        let tokens = parse_tokens("{{scene}}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "scene");
        assert_eq!(tokens[0].span, 0..9);
    }

    #[test]
    fn test_parse_multiple_tokens() {
        let tokens = parse_tokens("{{blend_file}}/{{date}}/{{scene}}_{{camera}}");
        let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["blend_file", "date", "scene", "camera"]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let tokens = parse_tokens("{{  frame  }}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "frame");
        assert_eq!(tokens[0].span, 0..13);
    }

    #[test]
    fn test_key_is_lowercase() {
        let tokens = parse_tokens("{{Scene}}");
        assert_eq!(tokens[0].name, "Scene");
        assert_eq!(tokens[0].key(), "scene");
    }

    #[test]
    fn test_no_tokens() {
        assert!(parse_tokens("renders/final_").is_empty());
    }

    #[test]
    fn test_unclosed_opener_is_literal() {
        assert!(parse_tokens("{{scene").is_empty());
        let tokens = parse_tokens("{{scene}}_{{frame");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "scene");
    }

    #[test]
    fn test_empty_and_blank_bodies_are_literal() {
        assert!(parse_tokens("{{}}").is_empty());
        assert!(parse_tokens("{{   }}").is_empty());
    }

    #[test]
    fn test_body_with_spaces_is_literal() {
        assert!(parse_tokens("{{scene name}}").is_empty());
    }

    #[test]
    fn test_extra_brace_before_token() {
        let input = "{{{scene}}";
        let tokens = parse_tokens(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&input[tokens[0].span.clone()], "{{scene}}");
    }

    #[test]
    fn test_stray_opener_before_token() {
        let input = "{{ a {{b}}";
        let tokens = parse_tokens(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "b");
        assert_eq!(&input[tokens[0].span.clone()], "{{b}}");
    }

    #[test]
    fn test_adjacent_tokens() {
        let tokens = parse_tokens("{{a}}{{b}}{{c}}");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].span, 10..15);
    }

    #[test]
    fn test_single_brace() {
        assert!(parse_tokens("{scene}").is_empty());
    }

    #[test]
    fn test_multibyte_text_around_tokens() {
        let input = "ré/{{scene}}_ü{{ü";
        let tokens = parse_tokens(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&input[tokens[0].span.clone()], "{{scene}}");
    }

    #[test]
    fn test_valid_variable_names() {
        assert!(is_valid_variable_name("scene"));
        assert!(is_valid_variable_name("frame_start"));
        assert!(is_valid_variable_name("_private"));
        assert!(is_valid_variable_name("take-2"));
        assert!(is_valid_variable_name("Scene"));
    }

    #[test]
    fn test_invalid_variable_names() {
        assert!(!is_valid_variable_name(""));
        assert!(!is_valid_variable_name("123"));
        assert!(!is_valid_variable_name("-start"));
        assert!(!is_valid_variable_name("a b"));
        assert!(!is_valid_variable_name("$uuid"));
    }

    #[test]
    fn test_has_variables() {
        assert!(has_variables("{{scene}}_"));
        assert!(!has_variables("plain"));
        assert!(!has_variables("{{incomplete"));
        assert!(!has_variables("incomplete}}"));
    }

    #[test]
    fn test_extract_variable_names() {
        assert_eq!(
            extract_variable_names("{{a}} and {{B}} and {{c}}"),
            vec!["a", "B", "c"]
        );
    }
}
