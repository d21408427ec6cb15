//! Line tokenizer reproducing OpenVPN's own `parse_line()` grammar.
//!
//! One logical line (already stripped of its terminator) is split into
//! whitespace-separated arguments. Within an argument a `"` or `'`
//! opens a quoted span running to the matching close quote; inside
//! double quotes a backslash escapes the next character, inside single
//! quotes nothing does. Outside quotes a backslash escapes the next
//! character, which is how spaces are embedded in unquoted arguments.
//! The decoded output never exceeds the input length.

use thiserror::Error;

/// Lexical errors in one configuration line. Positions are 0-based
/// byte offsets of the start of the offending argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unterminated double quote at position {offset}")]
    UnterminatedDoubleQuote { offset: usize },
    #[error("unterminated single quote at position {offset}")]
    UnterminatedSingleQuote { offset: usize },
    #[error("trailing escaping backslash at position {offset}")]
    TrailingBackslash { offset: usize },
}

fn unterminated(quote: char, offset: usize) -> SyntaxError {
    if quote == '"' {
        SyntaxError::UnterminatedDoubleQuote { offset }
    } else {
        SyntaxError::UnterminatedSingleQuote { offset }
    }
}

/// Split one configuration line into its decoded argument vector.
///
/// A blank line, or a full-line comment (`#` or `;` as the first
/// non-blank character), yields an empty vector.
pub fn tokenize(line: &str) -> Result<Vec<String>, SyntaxError> {
    let mut args = Vec::new();
    let mut chars = line.char_indices().peekable();

    loop {
        while matches!(chars.peek(), Some((_, ch)) if ch.is_ascii_whitespace()) {
            chars.next();
        }
        let Some(&(word_start, first)) = chars.peek() else {
            break;
        };
        if args.is_empty() && matches!(first, '#' | ';') {
            return Ok(Vec::new());
        }

        let mut arg = String::new();
        while let Some(&(_, ch)) = chars.peek() {
            if ch.is_ascii_whitespace() {
                break;
            }
            chars.next();
            match ch {
                quote @ ('"' | '\'') => loop {
                    match chars.next() {
                        None => return Err(unterminated(quote, word_start)),
                        Some((_, c)) if c == quote => break,
                        Some((_, '\\')) if quote == '"' => match chars.next() {
                            Some((_, escaped)) => arg.push(escaped),
                            None => return Err(unterminated(quote, word_start)),
                        },
                        Some((_, c)) => arg.push(c),
                    }
                },
                '\\' => match chars.next() {
                    Some((_, escaped)) => arg.push(escaped),
                    None => {
                        return Err(SyntaxError::TrailingBackslash { offset: word_start });
                    }
                },
                _ => arg.push(ch),
            }
        }
        args.push(arg);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{tokenize, SyntaxError};

    fn ok(line: &str) -> Vec<String> {
        tokenize(line).expect("line should tokenize")
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(ok("remote  vpn.example.com\t1194"), ["remote", "vpn.example.com", "1194"]);
    }

    #[test]
    fn blank_line_yields_no_arguments() {
        assert_eq!(ok(""), Vec::<String>::new());
        assert_eq!(ok("   \t  "), Vec::<String>::new());
    }

    #[test]
    fn full_line_comment_yields_no_arguments() {
        assert_eq!(ok("# remote vpn.example.com"), Vec::<String>::new());
        assert_eq!(ok("  ; management localhost"), Vec::<String>::new());
    }

    #[test]
    fn hash_after_first_argument_is_not_a_comment() {
        assert_eq!(ok("auth #md5"), ["auth", "#md5"]);
    }

    #[test]
    fn double_quotes_group_and_escape() {
        assert_eq!(ok(r#"key "a\"b" 1"#), ["key", "a\"b", "1"]);
        assert_eq!(ok(r#"ca "my ca.pem""#), ["ca", "my ca.pem"]);
    }

    #[test]
    fn single_quotes_take_content_literally() {
        assert_eq!(ok(r#"ca 'a\"b'"#), ["ca", r#"a\"b"#]);
    }

    #[test]
    fn backslash_escapes_space_outside_quotes() {
        assert_eq!(ok(r"cert my\ cert.pem"), ["cert", "my cert.pem"]);
    }

    #[test]
    fn adjacent_quoted_spans_join_into_one_argument() {
        assert_eq!(ok(r#"dev t"un"0"#), ["dev", "tun0"]);
    }

    #[test]
    fn unterminated_double_quote_reports_argument_offset() {
        assert_eq!(
            tokenize(r#"secret "abc"#),
            Err(SyntaxError::UnterminatedDoubleQuote { offset: 7 })
        );
    }

    #[test]
    fn unterminated_single_quote_reports_argument_offset() {
        assert_eq!(
            tokenize("auth 'sha"),
            Err(SyntaxError::UnterminatedSingleQuote { offset: 5 })
        );
    }

    #[test]
    fn escaped_quote_then_end_of_line_is_unterminated() {
        assert_eq!(
            tokenize(r#"secret "abc\"#),
            Err(SyntaxError::UnterminatedDoubleQuote { offset: 7 })
        );
    }

    #[test]
    fn trailing_backslash_is_an_error() {
        assert_eq!(
            tokenize(r"route 10.0.0.0 \"),
            Err(SyntaxError::TrailingBackslash { offset: 15 })
        );
    }

    #[test]
    fn error_messages_name_the_position() {
        let err = tokenize(r#"secret "abc"#).expect_err("unterminated");
        assert_eq!(err.to_string(), "unterminated double quote at position 7");
    }
}
